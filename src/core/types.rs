//! Domain records for provisioning runs.

use std::path::PathBuf;

/// One entry of a secret table: the output file name and how many
/// characters the secret should have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretSpec {
    /// File name under the output directory (e.g. `db_password.txt`).
    pub name: &'static str,
    /// Number of characters to generate.
    pub length: usize,
}

impl SecretSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }
}

/// A secret file written during a run.
///
/// Describes where the secret went, never what it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedSecret {
    pub name: &'static str,
    pub path: PathBuf,
    pub length: usize,
}
