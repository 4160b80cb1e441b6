//! Completion command
//!
//! Generate shell completion scripts

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can save this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// pyprep completion bash > /usr/local/share/bash-completion/completions/pyprep
///
/// # Zsh
/// pyprep completion zsh > /usr/local/share/zsh/site-functions/_pyprep
/// ```
#[allow(
    clippy::unnecessary_wraps,
    reason = "Result type maintained for consistency with command signature pattern"
)]
pub(crate) fn run(shell: Shell) -> Result<()> {
    let mut cmd = crate::Cli::command();

    generate(shell, &mut cmd, "pyprep", &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_bash() {
        // Just verify it doesn't panic
        let result = run(Shell::Bash);
        assert!(result.is_ok());
    }

    #[test]
    fn completion_zsh() {
        let result = run(Shell::Zsh);
        assert!(result.is_ok());
    }
}
