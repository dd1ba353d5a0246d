//! `sn completions` — shell completion script generation.

use anyhow::Result;
use clap::Args;
use clap_complete::{generate, Shell};

/// Arguments for `sn completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script generation.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generate a shell completion script to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_completions(shell: Shell, command: &mut clap::Command) -> Result<()> {
    let mut out = std::io::stdout();
    generate(shell, command, "sn", &mut out);
    Ok(())
}
