//! # quern-algos — Built-in Hash Algorithms
//!
//! The algorithm half of Quern: concrete engines for the machinery in
//! `quern-core`, and the registry of named built-in hash functions through
//! which callers obtain descriptors.
//!
//! - **SHA-256** — from-scratch compression, schedule expansion, and
//!   padding per FIPS 180-4.
//!
//! Basic usage:
//!
//! ```
//! let digest = quern_algos::sha256().hash(b"Hello, world!");
//! assert_eq!(
//!     digest.hex(),
//!     "315f5bdb76d078c43b8ac0064e4a0164612b1fce77c869345bfc94c75894edd3"
//! );
//! assert!(digest.verify_message(b"Hello, world!"));
//! assert!(!digest.verify_message(b"another message"));
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `quern-core` internally.
//! - No mocking of cryptographic operations in tests — vectors come from
//!   the published standard, and the engine is differentially tested
//!   against the RustCrypto `sha2` implementation.
//! - No `unsafe` code; no `panic!()` or `.unwrap()` outside tests and
//!   constant static initialization.

pub mod builtins;
pub mod sha256;

pub use builtins::sha256;
pub use sha256::Sha256;
