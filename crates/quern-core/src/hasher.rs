//! # Incremental Hasher
//!
//! `Hasher` is the mutable handle a caller holds for one hash computation:
//! created by [`HashFunction::init`](crate::HashFunction::init), fed with
//! [`update`](Hasher::update) any number of times, consumed by a single
//! [`digest`](Hasher::digest) call.
//!
//! The algorithm-specific work lives behind the [`HashEngine`] trait; the
//! hasher owns exactly one engine and guards its lifecycle. After
//! `digest()` the engine is dropped and every further operation fails with
//! [`HashError::AlreadyFinalized`] — the terminal state is one-way.

use crate::digest::Digest;
use crate::error::{checked_range, HashError};
use crate::function::HashFunction;

/// The algorithm-specific half of an incremental hash computation.
///
/// An engine owns its accumulation and scratch buffers exclusively; they
/// are reused in place across blocks and never exposed. `finalize` is
/// called at most once per engine — [`Hasher`] enforces this.
pub trait HashEngine: Send {
    /// Absorb `input` into the running state.
    fn update(&mut self, input: &[u8]);

    /// Pad, process the final block(s), and return the digest bytes.
    fn finalize(&mut self) -> Vec<u8>;
}

/// Lifecycle of a hasher: accumulating input, or finalized and inert.
enum Lifecycle {
    Accumulating(Box<dyn HashEngine>),
    Finalized,
}

/// The mutable intermediate state of one hash computation.
///
/// For any sequence of `update` calls whose concatenated inputs equal a
/// message `m`, `digest()` returns the same bytes as a one-shot
/// `algorithm().hash(m)` — fragmentation of the input never changes the
/// result.
pub struct Hasher {
    function: HashFunction,
    lifecycle: Lifecycle,
}

impl Hasher {
    pub(crate) fn new(function: HashFunction, engine: Box<dyn HashEngine>) -> Self {
        Self {
            function,
            lifecycle: Lifecycle::Accumulating(engine),
        }
    }

    /// The hash function this hasher computes. Constant for the lifetime
    /// of the instance.
    pub fn algorithm(&self) -> &HashFunction {
        &self.function
    }

    /// Append `input` to the message being hashed.
    ///
    /// Chainable: `hasher.update(a)?.update(b)?`. The input is not
    /// modified. Fails with [`HashError::AlreadyFinalized`] once
    /// [`digest`](Self::digest) has been called.
    pub fn update(&mut self, input: &[u8]) -> Result<&mut Self, HashError> {
        match self.lifecycle {
            Lifecycle::Accumulating(ref mut engine) => engine.update(input),
            Lifecycle::Finalized => return Err(HashError::AlreadyFinalized),
        }
        Ok(self)
    }

    /// Append `length` bytes of `input` starting at `offset`.
    ///
    /// The sub-range is validated before any state changes; an invalid
    /// range fails with [`HashError::RangeOutOfBounds`] and leaves the
    /// hasher untouched.
    pub fn update_range(
        &mut self,
        input: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<&mut Self, HashError> {
        let sub = checked_range(input, offset, length)?;
        self.update(sub)
    }

    /// Finalize the computation and return the digest of the message
    /// received so far.
    ///
    /// Consumes the hasher's engine: a second call fails with
    /// [`HashError::AlreadyFinalized`].
    pub fn digest(&mut self) -> Result<Digest, HashError> {
        match std::mem::replace(&mut self.lifecycle, Lifecycle::Finalized) {
            Lifecycle::Accumulating(mut engine) => {
                Ok(Digest::new(self.function.clone(), &engine.finalize()))
            }
            Lifecycle::Finalized => Err(HashError::AlreadyFinalized),
        }
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.function.name())
            .field(
                "finalized",
                &matches!(self.lifecycle, Lifecycle::Finalized),
            )
            .finish()
    }
}
