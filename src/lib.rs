//! gensecrets - Generate high-entropy secret files for container secret injection.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # The provisioning run
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Secret table, alphabet, output directory
//!     ├── types         # SecretSpec and ProvisionedSecret
//!     ├── random        # IndexSource trait and secret generator
//!     ├── validation    # Secret table checks
//!     └── provision     # Directory creation and file writes
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gensecrets::core::constants::SECRET_TABLE;
//! use gensecrets::core::provision::provision;
//! use gensecrets::core::random::OsEntropy;
//!
//! let written = provision(Path::new("secrets"), SECRET_TABLE, &mut OsEntropy, |s| {
//!     println!("wrote {}", s.path.display());
//! })?;
//! assert_eq!(written.len(), SECRET_TABLE.len());
//! # Ok::<(), gensecrets::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
