//! Error types for gensecrets.
//!
//! Errors are layered: a top-level [`Error`] wraps the table validation and
//! provisioning failures so callers can match on the category they care about.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provision(#[from] ProvisionError),
}

/// Problems with a secret table, detected before anything touches disk.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret '{0}' has zero length")]
    ZeroLength(String),

    #[error("secret '{0}' is listed more than once")]
    DuplicateName(String),
}

/// Filesystem failures during a provisioning run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    WriteSecret {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
