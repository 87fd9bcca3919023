//! # Block Accumulation Engine
//!
//! `BlockBuffer` turns a stream of arbitrary-length byte appends into a
//! sequence of fixed-size blocks, invoking a processing hook once per full
//! block. It is the buffering half of every block-oriented hash algorithm
//! and knows nothing about any particular compression function.
//!
//! ## Invariants
//!
//! - Fewer than `N` bytes are pending between calls; a full block is
//!   always handed to the hook and drained within the `append` that
//!   completed it.
//! - Fragmentation invariance: splitting a message across any number of
//!   `append` calls produces the same final state and the same hook
//!   invocation sequence as appending it whole.

/// A fixed-size block accumulator over blocks of `N` bytes.
///
/// The processing hook is passed to [`append`](Self::append) rather than
/// stored, so the owning engine can borrow its own state inside the hook
/// without aliasing the accumulator.
#[derive(Debug, Clone)]
pub struct BlockBuffer<const N: usize> {
    block: [u8; N],
    filled: usize,
    blocks_processed: u64,
}

impl<const N: usize> BlockBuffer<N> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            block: [0u8; N],
            filled: 0,
            blocks_processed: 0,
        }
    }

    /// Append `input`, invoking `process` with each block as it fills.
    ///
    /// Consumes the whole slice, however many blocks it spans. A zero-length
    /// input is a no-op. The input itself is never modified.
    pub fn append(&mut self, mut input: &[u8], mut process: impl FnMut(&[u8; N])) {
        while !input.is_empty() {
            let take = (N - self.filled).min(input.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];
            if self.filled == N {
                process(&self.block);
                self.filled = 0;
                self.blocks_processed += 1;
            }
        }
    }

    /// The buffered partial block: always fewer than `N` bytes.
    pub fn pending(&self) -> &[u8] {
        &self.block[..self.filled]
    }

    /// Number of full blocks handed to the processing hook so far.
    pub fn blocks_processed(&self) -> u64 {
        self.blocks_processed
    }

    /// Total length appended so far, in bits.
    ///
    /// This is the quantity length-based padding encodes; the `u64` width
    /// covers the standard's 2^64 − 1 bit message limit.
    pub fn message_bits(&self) -> u64 {
        (self.blocks_processed * N as u64 + self.filled as u64) * 8
    }
}

impl<const N: usize> Default for BlockBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
