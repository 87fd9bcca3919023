//! # quern-core — Streaming Hash Machinery
//!
//! This crate is the algorithm-agnostic half of Quern. It defines the
//! types every hash computation flows through and the buffering engine
//! block-oriented algorithms are built on; the algorithms themselves live
//! in `quern-algos`.
//!
//! ## Key Design Principles
//!
//! 1. **One descriptor, many computations.** A [`HashFunction`] is a
//!    stateless, `Arc`-shared descriptor. Every call to
//!    [`init()`](HashFunction::init) or [`hash()`](HashFunction::hash)
//!    runs on an independent engine with its own buffers, so descriptors
//!    are safe to share across threads without limit.
//!
//! 2. **Single-use hashers, enforced.** A [`Hasher`] carries an explicit
//!    lifecycle: accumulating, then finalized. `digest()` drops the engine
//!    and every later call fails with
//!    [`HashError::AlreadyFinalized`] rather than computing a misleading
//!    result.
//!
//! 3. **Bytes are identity.** [`Digest`] equality and hashing cover the
//!    byte contents only; the producing algorithm is a provenance tag.
//!
//! 4. **Inputs are never mutated.** Byte-slice parameters are read-only,
//!    and every buffer handed back to callers is a fresh copy or an
//!    immutable borrow.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `quern-*` crates (this is the leaf of the
//!   DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bitwise;
pub mod block;
pub mod digest;
pub mod error;
pub mod function;
pub mod hasher;

#[cfg(test)]
mod testutil;

// Re-export primary types for ergonomic imports.
pub use block::BlockBuffer;
pub use digest::Digest;
pub use error::HashError;
pub use function::HashFunction;
pub use hasher::{HashEngine, Hasher};
