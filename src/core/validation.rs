//! Input validation for secret tables.
//!
//! Every entry must name a plain file directly inside the output directory
//! and ask for at least one character.

use std::collections::HashSet;

use crate::core::types::SecretSpec;
use crate::error::{Result, ValidationError};

/// Validate a secret file name.
///
/// Names must be non-empty and cannot contain path separators, NUL bytes,
/// or be `.`/`..`.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if name == "." || name == ".." {
        return Err(invalid(name, "must be a file name, not a directory reference"));
    }

    if let Some(ch) = name.chars().find(|&c| c == '/' || c == '\\' || c == '\0') {
        return Err(invalid(
            name,
            &format!(
                "contains '{}'; secrets are written directly into the output directory",
                ch.escape_default()
            ),
        ));
    }

    Ok(())
}

/// Validate a whole table before any file is written.
///
/// # Errors
///
/// Returns the first `ValidationError` found: a bad name, a zero length,
/// or a name listed twice.
pub fn validate_table(table: &[SecretSpec]) -> Result<()> {
    let mut seen = HashSet::with_capacity(table.len());

    for spec in table {
        validate_name(spec.name)?;

        if spec.length == 0 {
            return Err(ValidationError::ZeroLength(spec.name.to_string()).into());
        }

        if !seen.insert(spec.name) {
            return Err(ValidationError::DuplicateName(spec.name.to_string()).into());
        }
    }

    Ok(())
}

fn invalid(name: &str, reason: &str) -> crate::error::Error {
    ValidationError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
