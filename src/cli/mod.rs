//! Command-line interface.

pub mod generate;
pub mod output;

use clap::Parser;

/// gensecrets - Generate high-entropy secret files for container secret injection.
///
/// Writes every secret into `./secrets`, replacing existing files.
#[derive(Parser)]
#[command(
    name = "gensecrets",
    about = "Generate high-entropy secret files for container secret injection",
    version,
    after_help = "Files are written to ./secrets and overwritten on every run."
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a provisioning run.
pub fn execute() -> crate::error::Result<()> {
    generate::execute()
}
