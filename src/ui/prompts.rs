//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message rather than hanging on stdin.

use std::io::{self, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("confirmation required; re-run interactively or pass --yes")]
    NotInteractive,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they decline.
/// An empty answer takes `default`. Fails with
/// [`PromptError::NotInteractive`] instead of assuming an answer when
/// prompts are disabled.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{message} {hint} ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        return Ok(default);
    }
    Ok(input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_mode_refuses() {
        let err = confirm("Proceed?", false, false).unwrap_err();
        assert!(matches!(err, PromptError::NotInteractive));
    }
}
