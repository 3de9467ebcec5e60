//! Random record identifiers
//!
//! Uniform alphanumeric strings. Not suitable for secrets.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Identifier length used when none is configured
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Generate an identifier from the thread-local generator
#[must_use]
pub fn generate_id(length: usize) -> String {
    generate_id_with(&mut rand::rng(), length)
}

/// Generate an identifier from a caller-supplied generator
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
