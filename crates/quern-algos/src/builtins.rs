//! # Built-in Hash Functions
//!
//! Process-wide singleton descriptors for the algorithms this crate
//! implements. Each accessor returns a clone of one lazily-constructed
//! [`HashFunction`], so every call site observes the same descriptor:
//! `sha256() == sha256()`, and digests produced through it report the same
//! algorithm.

use once_cell::sync::Lazy;
use quern_core::HashFunction;

use crate::sha256::{Sha256, DIGEST_BYTES};

static SHA256: Lazy<HashFunction> = Lazy::new(|| {
    tracing::debug!(
        algorithm = "SHA-256",
        digest_length = DIGEST_BYTES,
        "constructing built-in hash function"
    );
    HashFunction::new("SHA-256", DIGEST_BYTES, || Box::new(Sha256::new()))
        .expect("digest length is positive")
});

/// The SHA-256 hash function.
///
/// Defined in [FIPS 180-4, *Secure Hash Standard
/// (SHS)*](https://csrc.nist.gov/publications/detail/fips/180/4/final)
/// (originally FIPS 180-2, 2002). Digest size: 256 bits.
pub fn sha256() -> HashFunction {
    SHA256.clone()
}
