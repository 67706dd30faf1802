//! Constants used throughout gensecrets.
//!
//! Centralizes the secret table and the strings the CLI prints.

use crate::core::types::SecretSpec;

/// Output directory, relative to the current working directory.
pub const SECRETS_DIR: &str = "secrets";

/// Secrets written on every run, in output order.
pub const SECRET_TABLE: &[SecretSpec] = &[
    SecretSpec::new("db_password.txt", 32),
    SecretSpec::new("redis_password.txt", 32),
    SecretSpec::new("jwt_secret.txt", 64),
    SecretSpec::new("admin_password.txt", 24),
    SecretSpec::new("backup_encryption_key.txt", 32),
    SecretSpec::new("ssl_keystore_password.txt", 32),
    SecretSpec::new("ssl_key_password.txt", 32),
];

/// Characters a secret is drawn from: ASCII letters, digits and punctuation.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Prefix of the confirmation line printed for each written file.
pub const GENERATED_PREFIX: &str = "Secret generated: ";

/// Final line printed after a successful run.
pub const SUMMARY_MESSAGE: &str = "All secrets generated. Load them with Docker secrets or a dedicated secret manager; never commit them to version control.";

/// Environment variable holding the log filter (e.g. `GENSECRETS_LOG=debug`).
pub const LOG_ENV: &str = "GENSECRETS_LOG";
