//! Pre-filled share links opened with the platform's URI handler.

use crate::errors::{AppError, AppResult};
use std::process::Command;

const WHATSAPP_TEXT: &str = "Your report is ready. Work hours report attached 📊";
const EMAIL_SUBJECT: &str = "Work hours report";
const EMAIL_BODY: &str = "Hi, your work hours report is attached.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ShareTarget {
    Whatsapp,
    Email,
}

impl ShareTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Whatsapp => "WhatsApp",
            ShareTarget::Email => "email",
        }
    }

    /// Static, non-parameterized composer URI. No data is attached.
    pub fn uri(&self) -> String {
        match self {
            ShareTarget::Whatsapp => {
                format!("https://wa.me/?text={}", urlencoding::encode(WHATSAPP_TEXT))
            }
            ShareTarget::Email => format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode(EMAIL_SUBJECT),
                urlencoding::encode(EMAIL_BODY)
            ),
        }
    }
}

/// Program and arguments that open `uri` on `os` (a `std::env::consts::OS`
/// value). On Windows the URI must not pass through `cmd.exe`, which splits
/// it at `&`.
fn opener_args(os: &str, uri: &str) -> (&'static str, Vec<String>) {
    match os {
        "windows" => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_string(), uri.to_string()],
        ),
        "macos" => ("open", vec![uri.to_string()]),
        _ => ("xdg-open", vec![uri.to_string()]),
    }
}

fn opener(uri: &str) -> Command {
    let (program, args) = opener_args(std::env::consts::OS, uri);
    let mut c = Command::new(program);
    c.args(args);
    c
}

/// Hand the URI to the OS. Fails if the opener is missing or exits non-zero.
pub fn launch(target: ShareTarget) -> AppResult<String> {
    let uri = target.uri();

    let status = opener(&uri).status().map_err(|e| {
        AppError::Share(format!("could not open {} composer: {}", target.label(), e))
    })?;

    if !status.success() {
        return Err(AppError::Share(format!(
            "{} composer exited with {}",
            target.label(),
            status
        )));
    }

    Ok(uri)
}
