//! Deterministic pseudo-random stream driving all stochastic visual
//! parameters.
//!
//! The generator is a 128-bit xorshift over four 32-bit words. It always
//! starts from the same fixed state, so two runs with equal configuration
//! produce byte-identical wallpapers. The stream is never reseeded; random
//! mode draws a separate one-shot value from the operating system to pick
//! shape *counts* only (see [`entropy_u32`]).

use crate::error::{WallgenError, WallgenResult};

const SEED_X: u32 = 123_456_789;
const SEED_Y: u32 = 362_436_069;
const SEED_Z: u32 = 521_288_629;
const SEED_W: u32 = 88_675_123;

/// xorshift128 pseudo-random generator. Not cryptographically secure.
///
/// One instance is owned by the caller and threaded `&mut` through every
/// layer renderer, so the whole pipeline shares a single sequential stream
/// and total output is sensitive to layer order.
#[derive(Clone, Debug)]
pub struct RandomSource {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl RandomSource {
    /// Create a generator at the fixed initial state.
    pub fn new() -> Self {
        Self {
            x: SEED_X,
            y: SEED_Y,
            z: SEED_Z,
            w: SEED_W,
        }
    }

    /// Advance the stream and return the next raw 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w ^= (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    /// Advance the stream and return a value in [0, 1].
    ///
    /// The division is by `u32::MAX`, so the upper bound is attained
    /// exactly when the raw word is all ones (about one draw in 2^32).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot OS entropy read, used only to pick shape counts in random mode.
///
/// Never mixed back into the [`RandomSource`] stream. Failure to read the
/// OS random source is fatal; there is no fallback.
pub fn entropy_u32() -> WallgenResult<u32> {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf)
        .map_err(|e| WallgenError::render(format!("os entropy source unavailable: {e}")))?;
    Ok(u32::from_le_bytes(buf))
}
