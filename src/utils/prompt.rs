//! Interactive yes/no confirmation.

use crate::errors::AppResult;
use std::io::{self, Write};

/// Ask `question` and return true only for an explicit "y" / "yes".
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
