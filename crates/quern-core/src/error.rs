//! # Error Types
//!
//! Defines the error taxonomy for the hashing API. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Invalid arguments are rejected before any state is mutated.
//! - Illegal-state errors fail fast instead of silently computing a
//!   digest over corrupted state.
//! - A verification mismatch is an expected `false`, never an error.

use thiserror::Error;

/// Errors raised by descriptor construction and hasher operations.
#[derive(Error, Debug)]
pub enum HashError {
    /// A hash function was constructed with a digest length of zero.
    #[error("digest length must be positive")]
    ZeroDigestLength,

    /// An `offset`/`length` pair does not describe a valid sub-range of
    /// the input. Reported before any state is mutated.
    #[error("sub-range out of bounds: offset {offset} + length {length} exceeds input of {available} bytes")]
    RangeOutOfBounds {
        /// Start of the requested sub-range.
        offset: usize,
        /// Number of bytes requested.
        length: usize,
        /// Actual length of the input.
        available: usize,
    },

    /// An operation was invoked on a hasher whose digest has already been
    /// taken.
    #[error("hasher already finalized")]
    AlreadyFinalized,
}

/// Borrow `length` bytes of `input` starting at `offset`, rejecting
/// invalid sub-ranges (including ones where `offset + length` overflows).
pub(crate) fn checked_range(
    input: &[u8],
    offset: usize,
    length: usize,
) -> Result<&[u8], HashError> {
    input
        .get(offset..)
        .and_then(|tail| tail.get(..length))
        .ok_or(HashError::RangeOutOfBounds {
            offset,
            length,
            available: input.len(),
        })
}
