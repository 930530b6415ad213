//! # Lattice Hash
//!
//! Maps `(seed, x, y)` on the integer lattice to a pseudo-random value.
//!
//! Every step is 32-bit two's-complement arithmetic. The output must match
//! the wrapping formula exactly, so each multiply, add and shift goes
//! through the `wrapping_*` family instead of relying on build profiles.

/// First hash multiplier.
pub const HASH_A: i32 = 134_775_813;
/// Second hash multiplier.
pub const HASH_B: i32 = 1_103_515_245;

/// Hashes a lattice point into roughly `[-1, 1]`.
///
/// `x` and `y` are expected to already be tiled; pass `y = 0` for 1D noise.
/// The result is not clamped: `i32::MIN` lands just below `-1.0`.
#[inline]
#[must_use]
pub fn hash(seed: i32, x: i32, y: i32) -> f64 {
    let left = (x ^ y).wrapping_mul(HASH_A) ^ seed.wrapping_add(x);
    let right = (HASH_B.wrapping_mul(x).wrapping_shl(16) ^ HASH_B.wrapping_mul(y))
        .wrapping_sub(HASH_A);

    f64::from(left.wrapping_mul(right)) / f64::from(i32::MAX)
}

/// Reduces a lattice coordinate into its period.
///
/// Truncating remainder: negative coordinates can give negative results.
/// `period` must be positive.
#[inline]
#[must_use]
pub const fn tile(coordinate: i32, period: i32) -> i32 {
    coordinate % period
}
