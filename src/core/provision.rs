//! Provisioning runs.
//!
//! Creates the output directory and writes one freshly generated secret per
//! table entry.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::random::{generate_secret, IndexSource};
use crate::core::types::{ProvisionedSecret, SecretSpec};
use crate::core::validation::validate_table;
use crate::error::{ProvisionError, Result};

/// Write one secret file per entry of `table` into `output_dir`.
///
/// The directory is created if missing. Existing files are overwritten with
/// the new secret and nothing else (no trailing newline). `on_written` is
/// called after each file lands, in table order.
///
/// # Arguments
///
/// * `output_dir` - Directory to write into, relative paths resolve against the cwd
/// * `table` - Secrets to generate
/// * `source` - Randomness for the generator
/// * `on_written` - Callback invoked with each written file
///
/// # Returns
///
/// The written files, in table order.
///
/// # Errors
///
/// Returns `ValidationError` for a bad table (nothing is touched on disk).
/// Returns `ProvisionError::CreateDir` if the directory cannot be created.
/// Returns `ProvisionError::WriteSecret` on the first file that cannot be
/// written; earlier files stay in place and later ones are not created.
pub fn provision<S, F>(
    output_dir: &Path,
    table: &[SecretSpec],
    source: &mut S,
    mut on_written: F,
) -> Result<Vec<ProvisionedSecret>>
where
    S: IndexSource + ?Sized,
    F: FnMut(&ProvisionedSecret),
{
    validate_table(table)?;

    info!(dir = %output_dir.display(), count = table.len(), "provisioning secrets");

    fs::create_dir_all(output_dir).map_err(|source| ProvisionError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(table.len());
    for spec in table {
        let path = output_dir.join(spec.name);

        let secret = generate_secret(source, spec.length);
        fs::write(&path, secret.as_bytes()).map_err(|source| ProvisionError::WriteSecret {
            path: path.clone(),
            source,
        })?;
        drop(secret);

        debug!(name = spec.name, length = spec.length, "wrote secret");

        let record = ProvisionedSecret {
            name: spec.name,
            path,
            length: spec.length,
        };
        on_written(&record);
        written.push(record);
    }

    info!(count = written.len(), "provisioning complete");
    Ok(written)
}
