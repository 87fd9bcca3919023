//! Toy hash function for exercising the algorithm-agnostic machinery in
//! tests without pulling in a real compression function.

use crate::function::HashFunction;
use crate::hasher::HashEngine;

/// A throwaway 8-byte "digest": XOR-folds input bytes into eight lanes by
/// position, then mixes in the message length. Deterministic and
/// accumulation-order-faithful, which is all the contract tests need.
#[derive(Default)]
struct Xor8 {
    acc: [u8; 8],
    len: u64,
}

impl HashEngine for Xor8 {
    fn update(&mut self, input: &[u8]) {
        for &byte in input {
            self.acc[(self.len % 8) as usize] ^= byte;
            self.len += 1;
        }
    }

    fn finalize(&mut self) -> Vec<u8> {
        let mut out = self.acc.to_vec();
        for (lane, byte) in out.iter_mut().zip(self.len.to_be_bytes()) {
            *lane ^= byte;
        }
        out
    }
}

/// A fresh XOR-8 descriptor. Each call builds an independent descriptor,
/// so identity-equality tests must hold on to one instance.
pub(crate) fn xor8() -> HashFunction {
    HashFunction::new("XOR-8", 8, || Box::new(Xor8::default()))
        .expect("digest length is positive")
}
