//! Deterministic generator for food placement.
//!
//! A 32-bit LCG whose output goes through a random-xorshift / multiply /
//! xorshift permutation. Seeded exactly once at start-up; every food spawn
//! draws from the same stream.

use rand_core::{RngCore, impls};

const MULTIPLIER: u32 = 747_796_405;
const INCREMENT: u32 = 2_891_336_453;
const MIX: u32 = 277_803_737;

#[derive(Clone, Debug)]
pub struct Pcg32 {
    state: u32,
}

impl Pcg32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        let state = self.state;
        let word = ((state >> ((state >> 28) + 4)) ^ state).wrapping_mul(MIX);
        (word >> 22) ^ word
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
