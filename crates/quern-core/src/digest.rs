//! # Digest Values
//!
//! `Digest` is an immutable byte string tagged with the hash function that
//! produced it. Equality and hashing are defined over the bytes alone —
//! two digests with equal bytes compare equal even if different algorithms
//! produced them. The tag exists for provenance and for
//! [`verify_message`](Digest::verify_message), not for identity.

use std::hash::{Hash, Hasher as StdHasher};

use crate::function::HashFunction;

/// An immutable digest, tagged with its producing hash function.
#[derive(Clone)]
pub struct Digest {
    algorithm: HashFunction,
    bytes: Box<[u8]>,
}

impl Digest {
    /// Tag a byte string with the hash function that produced it.
    ///
    /// The bytes are copied; later changes to the caller's buffer never
    /// reach the digest.
    pub fn new(algorithm: HashFunction, bytes: &[u8]) -> Self {
        Self {
            algorithm,
            bytes: bytes.into(),
        }
    }

    /// The hash function which created this digest.
    pub fn algorithm(&self) -> &HashFunction {
        &self.algorithm
    }

    /// The digest bytes, borrowed. Immutable by construction.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The digest bytes as a fresh owned copy. Each call returns an
    /// independent buffer; mutating one never affects the digest or any
    /// other copy.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Lowercase hexadecimal rendering: two characters per byte, in byte
    /// order, most-significant nibble first.
    pub fn hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Test whether a message matches this digest.
    ///
    /// Recomputes `algorithm().hash(input)` and compares the bytes for
    /// exact equality. A mismatch is an expected outcome, not an error.
    pub fn verify_message(&self, input: &[u8]) -> bool {
        self.algorithm.hash(input).bytes == self.bytes
    }
}

/// Equality over the byte contents only; the producing algorithm is not
/// part of the contract.
impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Digest {}

/// Hashes the byte contents only, consistent with equality.
impl Hash for Digest {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm.name())
            .field("hex", &self.hex())
            .finish()
    }
}
