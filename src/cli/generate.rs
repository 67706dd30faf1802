//! Generate command - write every secret in the table to `./secrets`.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::constants::{SECRETS_DIR, SECRET_TABLE, SUMMARY_MESSAGE};
use crate::core::provision::provision;
use crate::core::random::OsEntropy;
use crate::error::Result;

/// Generate all secrets into the `secrets` directory of the current directory.
pub fn execute() -> Result<()> {
    info!("Generating {} secrets", SECRET_TABLE.len());

    provision(Path::new(SECRETS_DIR), SECRET_TABLE, &mut OsEntropy, |secret| {
        output::generated(&secret.path.display().to_string());
    })?;

    output::success(SUMMARY_MESSAGE);
    Ok(())
}
