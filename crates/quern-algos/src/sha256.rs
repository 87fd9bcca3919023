//! # SHA-256 Engine
//!
//! A from-scratch implementation of the SHA-256 compression function,
//! message-schedule expansion, and length-based padding, per FIPS 180-4.
//! The engine rides on [`BlockBuffer`] for accumulation and plugs into the
//! incremental API through the [`HashEngine`] trait.
//!
//! ## Numeric Semantics
//!
//! Every addition wraps modulo 2^32 (`wrapping_add`); rotations are 32-bit
//! rotate-right; the shifts inside the sigma functions are logical.
//!
//! ## Buffer Ownership
//!
//! The accumulation buffer and the 64-word schedule are owned exclusively
//! by the engine and rewritten in place each block. The eight working
//! variables of the round loop are stack locals.

use quern_core::bitwise::{choose, majority};
use quern_core::{BlockBuffer, HashEngine};

/// Bytes consumed per compression step: 16 big-endian 32-bit words.
pub const BLOCK_BYTES: usize = 64;

/// Bytes in a SHA-256 digest: the 8-word state, serialized big-endian.
pub const DIGEST_BYTES: usize = 32;

/// Words in the expanded message schedule (one per round).
const SCHEDULE_WORDS: usize = 64;

/// Initial hash state: the fractional parts of the square roots of the
/// first 8 primes.
const INITIAL_STATE: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: the fractional parts of the cube roots of the first
/// 64 primes.
const K: [u32; SCHEDULE_WORDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// The SHA-256 incremental engine.
///
/// Obtain one through [`crate::builtins::sha256()`] rather than directly;
/// the registry descriptor ties digests back to their producing function.
pub struct Sha256 {
    state: [u32; 8],
    buffer: BlockBuffer<BLOCK_BYTES>,
    schedule: [u32; SCHEDULE_WORDS],
}

impl Sha256 {
    /// An engine in its initial state.
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: BlockBuffer::new(),
            schedule: [0u32; SCHEDULE_WORDS],
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashEngine for Sha256 {
    fn update(&mut self, input: &[u8]) {
        let Self {
            state,
            buffer,
            schedule,
        } = self;
        buffer.append(input, |block| compress(state, schedule, block));
    }

    fn finalize(&mut self) -> Vec<u8> {
        let bits = self.buffer.message_bits();
        let pending = self.buffer.pending().len();

        // One 0x80 byte, zeros to the last 8 bytes of a block boundary,
        // then the big-endian bit length. Spills into a second padding
        // block when fewer than 8 bytes remain after the 0x80.
        let zeros = if pending < BLOCK_BYTES - 8 {
            BLOCK_BYTES - 9 - pending
        } else {
            2 * BLOCK_BYTES - 9 - pending
        };
        let mut tail = [0u8; 2 * BLOCK_BYTES];
        tail[0] = 0x80;
        tail[1 + zeros..9 + zeros].copy_from_slice(&bits.to_be_bytes());

        let Self {
            state,
            buffer,
            schedule,
        } = self;
        buffer.append(&tail[..9 + zeros], |block| compress(state, schedule, block));

        let mut out = Vec::with_capacity(DIGEST_BYTES);
        for word in self.state {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// Run one compression step: expand `block` into the schedule, mix it
/// through 64 rounds, and fold the result back into `state`.
fn compress(state: &mut [u32; 8], schedule: &mut [u32; SCHEDULE_WORDS], block: &[u8; BLOCK_BYTES]) {
    for (word, chunk) in schedule[..16].iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..SCHEDULE_WORDS {
        schedule[t] = small_sigma1(schedule[t - 2])
            .wrapping_add(schedule[t - 7])
            .wrapping_add(small_sigma0(schedule[t - 15]))
            .wrapping_add(schedule[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for (&k, &w) in K.iter().zip(schedule.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, mixed) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(mixed);
    }
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sha2::Digest as _;

    /// Run the engine directly over `input` and return the digest hex.
    fn engine_hex(input: &[u8]) -> String {
        let mut engine = Sha256::new();
        engine.update(input);
        engine
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    fn oracle_hex(input: &[u8]) -> String {
        let digest = sha2::Sha256::digest(input);
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }

    // -----------------------------------------------------------------------
    // Known vectors (FIPS 180-4 examples)
    // -----------------------------------------------------------------------

    #[test]
    fn test_empty_message() {
        assert_eq!(
            engine_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            engine_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_two_block_message() {
        assert_eq!(
            engine_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    // -----------------------------------------------------------------------
    // Padding branch boundaries
    //
    // 55 pending bytes is the longest message whose padding still fits in
    // the same block; 56 is the shortest that forces a second block.
    // -----------------------------------------------------------------------

    #[test]
    fn test_padding_fits_in_final_block() {
        assert_eq!(
            engine_hex(&[0u8; 55]),
            "02779466cdec163811d078815c633f21901413081449002f24aa3e80f0b88ef7"
        );
    }

    #[test]
    fn test_padding_spills_into_extra_block() {
        assert_eq!(
            engine_hex(&[0u8; 56]),
            "d4817aa5497628e7c77e6b606107042bbba3130888c5f47a375e6179be789fbb"
        );
        assert_eq!(
            engine_hex(&[0u8; 57]),
            "65a16cb7861335d5ace3c60718b5052e44660726da4cd13bb745381b235a1785"
        );
    }

    #[test]
    fn test_exact_block_length_message() {
        assert_eq!(
            engine_hex(&[0u8; 64]),
            "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"
        );
    }

    // -----------------------------------------------------------------------
    // Fragmentation
    // -----------------------------------------------------------------------

    #[test]
    fn test_fragmented_update_matches_whole() {
        let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let mut engine = Sha256::new();
        engine.update(&message[..1]);
        engine.update(&message[1..9]);
        engine.update(&message[9..9]);
        engine.update(&message[9..]);
        let hex: String = engine
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        assert_eq!(hex, engine_hex(message));
    }

    // -----------------------------------------------------------------------
    // Differential check against the RustCrypto implementation
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn differential_against_rustcrypto(
            message in prop::collection::vec(any::<u8>(), 0..512),
        ) {
            prop_assert_eq!(engine_hex(&message), oracle_hex(&message));
        }

        /// Lengths straddling every position in a block relative to the
        /// padding boundary.
        #[test]
        fn differential_block_boundary_lengths(len in 0usize..130, byte in any::<u8>()) {
            let message = vec![byte; len];
            prop_assert_eq!(engine_hex(&message), oracle_hex(&message));
        }
    }
}
