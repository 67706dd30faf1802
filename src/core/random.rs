//! Random secret generation.
//!
//! The generator draws from an [`IndexSource`] so tests can substitute a
//! deterministic source. Production code always uses [`OsEntropy`], which
//! reads from the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::Rng;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::ALPHABET;

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Return an index in `0..bound`. Callers never pass a zero `bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Index source backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl IndexSource for OsEntropy {
    fn next_index(&mut self, bound: usize) -> usize {
        let mut rng = OsRng;
        rng.gen_range(0..bound)
    }
}

/// Generate a secret of exactly `length` characters from [`ALPHABET`].
///
/// Each character is an independent draw from `source`. A zero `length`
/// yields an empty string. The returned value is wiped from memory on drop.
pub fn generate_secret<S: IndexSource + ?Sized>(
    source: &mut S,
    length: usize,
) -> Zeroizing<String> {
    trace!(length, "generating secret");

    // Reserve up front so the buffer never reallocates and leaves copies behind.
    let mut secret = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let idx = source.next_index(ALPHABET.len());
        secret.push(char::from(ALPHABET[idx]));
    }
    secret
}
