//! Path utilities: resolve the application directory, expand ~.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the application directory.
pub const HOME_ENV: &str = "WORKHOURS_HOME";

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// `$WORKHOURS_HOME`, else `~/.workhours`, else `./.workhours`.
pub fn app_dir() -> PathBuf {
    if let Ok(custom) = env::var(HOME_ENV) {
        if !custom.trim().is_empty() {
            return expand_tilde(&custom);
        }
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".workhours")
}
