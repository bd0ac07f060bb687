use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Print `prompt` and read a yes/no answer; anything but y/yes is "no".
pub fn confirm<R: BufRead>(prompt: &str, input: &mut R) -> AppResult<bool> {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}
