//! # Hash Function Descriptor
//!
//! `HashFunction` is the stateless descriptor for one hash algorithm: a
//! name, a digest length, and a factory that produces fresh engines. It is
//! the entry point of every hash computation — incremental via
//! [`init`](HashFunction::init), one-shot via [`hash`](HashFunction::hash).
//!
//! Descriptors are `Arc`-shared: cloning is cheap, and two clones of the
//! same descriptor compare equal. They hold no mutable state, so a single
//! descriptor serves unlimited concurrent computations.

use std::fmt;
use std::sync::Arc;

use crate::digest::Digest;
use crate::error::{checked_range, HashError};
use crate::hasher::{HashEngine, Hasher};

/// Factory producing engines in their initial state.
type EngineFactory = dyn Fn() -> Box<dyn HashEngine> + Send + Sync;

struct Inner {
    name: String,
    digest_length: usize,
    factory: Box<EngineFactory>,
}

/// A deterministic mapping from messages to fixed-length digests.
///
/// Messages are variable-length byte sequences; digests are byte strings
/// of [`digest_length`](Self::digest_length) bytes. The descriptor itself
/// is stateless: every computation runs on an independent engine produced
/// by the factory, so concurrent use never shares mutable state.
#[derive(Clone)]
pub struct HashFunction {
    inner: Arc<Inner>,
}

impl HashFunction {
    /// Build a descriptor from a name, a digest length in bytes, and an
    /// engine factory.
    ///
    /// Fails with [`HashError::ZeroDigestLength`] if `digest_length` is
    /// zero.
    pub fn new(
        name: impl Into<String>,
        digest_length: usize,
        factory: impl Fn() -> Box<dyn HashEngine> + Send + Sync + 'static,
    ) -> Result<Self, HashError> {
        if digest_length == 0 {
            return Err(HashError::ZeroDigestLength);
        }
        Ok(Self {
            inner: Arc::new(Inner {
                name: name.into(),
                digest_length,
                factory: Box::new(factory),
            }),
        })
    }

    /// A string identifying this hash function.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The length in bytes of the digests this function produces.
    pub fn digest_length(&self) -> usize {
        self.inner.digest_length
    }

    /// Begin an incremental computation: a brand-new [`Hasher`] in its
    /// initial state, independent of every other hasher ever created from
    /// this descriptor.
    pub fn init(&self) -> Hasher {
        Hasher::new(self.clone(), (self.inner.factory)())
    }

    /// Hash a complete message in one call.
    ///
    /// Deterministic: repeated invocations with the same input yield the
    /// same digest. The input is not modified. Equivalent to
    /// `init().update(input)?.digest()?`.
    pub fn hash(&self, input: &[u8]) -> Digest {
        let mut engine = (self.inner.factory)();
        engine.update(input);
        Digest::new(self.clone(), &engine.finalize())
    }

    /// Hash `length` bytes of `input` starting at `offset`.
    ///
    /// Fails with [`HashError::RangeOutOfBounds`] if the sub-range is
    /// invalid; equivalent to [`hash`](Self::hash) on the sliced input
    /// otherwise.
    pub fn hash_range(
        &self,
        input: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<Digest, HashError> {
        Ok(self.hash(checked_range(input, offset, length)?))
    }
}

/// Descriptors compare by identity of the shared allocation: clones of one
/// descriptor are equal, independently-built descriptors are not — even
/// with identical metadata.
impl PartialEq for HashFunction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for HashFunction {}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashFunction")
            .field("name", &self.inner.name)
            .field("digest_length", &self.inner.digest_length)
            .finish_non_exhaustive()
    }
}
