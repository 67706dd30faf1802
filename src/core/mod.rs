//! Core library components.
//!
//! This module contains the reusable logic for generating secrets and
//! writing them to disk, independent of the command-line surface.

pub mod constants;
pub mod provision;
pub mod random;
pub mod types;
pub mod validation;
