//! gensecrets - Generate high-entropy secret files for container secret injection.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gensecrets::cli::output;
use gensecrets::cli::{execute, Cli};
use gensecrets::core::constants::{LOG_ENV, SECRETS_DIR};
use gensecrets::error::{Error, ProvisionError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gensecrets=debug")
        } else {
            EnvFilter::new("gensecrets=warn")
        }
    });

    // Logs go to stderr; stdout carries only the confirmation lines.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute() {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Provision(ProvisionError::CreateDir { .. }) => Some(format!(
                "make sure ./{} is a writable directory or does not exist yet",
                SECRETS_DIR
            )),
            Error::Provision(ProvisionError::WriteSecret { .. }) => {
                Some("check permissions and free space in the output directory".to_string())
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
