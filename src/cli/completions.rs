//! Completions command.
//!
//! Prints a completion script for the requested shell to stdout.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Write the completion script for `shell` into `out`.
pub fn render(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(CompletionShell::from(shell), &mut cmd, bin, out);
}

/// Generate shell completions.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    render(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}
