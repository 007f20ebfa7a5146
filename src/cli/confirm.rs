//! Confirmation prompt for destructive commands

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

/// Asks a yes/no question on the terminal
///
/// `--yes` answers for the user. Without a terminal on stdin the answer is
/// no, so scripts never block.
pub fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        tracing::debug!(question, "stdin is not a terminal, declining");
        return Ok(false);
    }

    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", question).context("Failed to write prompt")?;
    stderr.flush().context("Failed to write prompt")?;

    let mut answer = String::new();
    stdin
        .lock()
        .read_line(&mut answer)
        .context("Failed to read answer")?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_yes_skips_prompt() {
        assert!(confirm("Delete?", true).unwrap());
    }

    #[test]
    fn answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }
}
