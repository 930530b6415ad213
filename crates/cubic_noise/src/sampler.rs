//! # Cubic Noise Sampler
//!
//! Smooth 1D/2D value noise built from the lattice hash and the cubic blend.
//!
//! ## Lattice Mapping
//!
//! A coordinate `v` maps to lattice index `trunc(v) / octave` (integer
//! division, truncating toward zero) and fractional offset
//! `v / octave - index`. For negative coordinates this is NOT a floor: the
//! offset goes negative and the cell straddling zero is twice as wide.
//! Changing this would change every sample left of the origin, so it is
//! kept for compatibility with existing seeds.
//!
//! ## Determinism Guarantee
//!
//! All lattice arithmetic is wrapping `i32`, and the float path is a fixed
//! sequence of IEEE operations. Given the same parameters, every platform
//! produces the same bits.

use crate::config::NoiseConfig;
use crate::error::{NoiseError, NoiseResult};
use crate::interpolate::cubic;
use crate::lattice::{hash, tile};

/// Period value meaning "never wrap".
pub const INFINITE_PERIOD: i32 = i32::MAX;

/// Lattice offsets sampled around a cell, relative to its index.
const NEIGHBOURS: [i32; 4] = [-1, 0, 1, 2];

/// Deterministic cubic noise generator.
///
/// Parameters are fixed at construction. Sampling takes `&self`, never
/// allocates, and is safe to call from any number of threads at once.
///
/// # Example
///
/// ```rust
/// use cubic_noise::CubicNoise;
///
/// let noise = CubicNoise::new(1337, 16, 0, 0)?;
/// let height = noise.sample_2d(37.5, 101.25);
/// assert_eq!(height, noise.sample_2d(37.5, 101.25));
/// # Ok::<(), cubic_noise::NoiseError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubicNoise {
    seed: i32,
    octave: i32,
    period_x: i32,
    period_y: i32,
}

impl CubicNoise {
    /// Creates a sampler.
    ///
    /// A period of `0` means no tiling on that axis and is stored as
    /// [`INFINITE_PERIOD`].
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidParameter`] if `octave <= 0` or either period is
    /// negative.
    pub fn new(seed: i32, octave: i32, period_x: i32, period_y: i32) -> NoiseResult<Self> {
        let octave = check_octave(octave)?;
        let period_x = check_period("period_x", period_x)?;
        let period_y = check_period("period_y", period_y)?;

        tracing::debug!(seed, octave, period_x, period_y, "cubic noise sampler created");

        Ok(Self {
            seed,
            octave,
            period_x,
            period_y,
        })
    }

    /// Returns the seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Returns the octave (scale divisor).
    #[inline]
    #[must_use]
    pub const fn octave(&self) -> i32 {
        self.octave
    }

    /// Returns the X period in lattice cells.
    #[inline]
    #[must_use]
    pub const fn period_x(&self) -> i32 {
        self.period_x
    }

    /// Returns the Y period in lattice cells.
    #[inline]
    #[must_use]
    pub const fn period_y(&self) -> i32 {
        self.period_y
    }

    /// Whether the X axis wraps.
    #[inline]
    #[must_use]
    pub const fn is_tiled_x(&self) -> bool {
        self.period_x != INFINITE_PERIOD
    }

    /// Whether the Y axis wraps.
    #[inline]
    #[must_use]
    pub const fn is_tiled_y(&self) -> bool {
        self.period_y != INFINITE_PERIOD
    }

    /// Returns a config that rebuilds this sampler.
    #[must_use]
    pub const fn config(&self) -> NoiseConfig {
        NoiseConfig {
            seed: self.seed,
            octave: self.octave,
            period_x: finite_or_zero(self.period_x),
            period_y: finite_or_zero(self.period_y),
        }
    }

    /// Samples 1D noise.
    ///
    /// # Returns
    ///
    /// The blended hash scaled by `0.5` and offset by `0.25`, so mostly in
    /// `[-0.25, 0.75]`. Not clamped.
    #[must_use]
    pub fn sample_1d(&self, x: f64) -> f64 {
        let (xi, lerp) = self.lattice(x);
        self.row(xi, 0, lerp) * 0.5 + 0.25
    }

    /// Samples 2D noise.
    ///
    /// Four rows are blended along X, then the rows are blended along Y.
    /// Same output scaling as [`CubicNoise::sample_1d`].
    #[must_use]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let (xi, lerp_x) = self.lattice(x);
        let (yi, lerp_y) = self.lattice(y);

        let [a, b, c, d] = NEIGHBOURS
            .map(|offset| self.row(xi, tile(yi.wrapping_add(offset), self.period_y), lerp_x));

        cubic(a, b, c, d, lerp_y) * 0.5 + 0.25
    }

    /// Splits a coordinate into lattice index and fractional offset.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn lattice(&self, v: f64) -> (i32, f64) {
        // `as` saturates out-of-range floats and maps NaN to 0.
        let index = (v as i32) / self.octave;
        (index, v / f64::from(self.octave) - f64::from(index))
    }

    /// Blends the four X neighbours of `xi` on lattice row `y`.
    #[inline]
    fn row(&self, xi: i32, y: i32, t: f64) -> f64 {
        let [a, b, c, d] = NEIGHBOURS
            .map(|offset| hash(self.seed, tile(xi.wrapping_add(offset), self.period_x), y));
        cubic(a, b, c, d, t)
    }
}

impl Default for CubicNoise {
    /// Seed 0, octave 1, no tiling.
    fn default() -> Self {
        Self {
            seed: 0,
            octave: 1,
            period_x: INFINITE_PERIOD,
            period_y: INFINITE_PERIOD,
        }
    }
}

fn check_octave(octave: i32) -> NoiseResult<i32> {
    if octave > 0 {
        return Ok(octave);
    }
    tracing::warn!(octave, "rejected non-positive octave");
    Err(NoiseError::InvalidParameter {
        name: "octave",
        value: octave,
        reason: "must be positive",
    })
}

fn check_period(name: &'static str, period: i32) -> NoiseResult<i32> {
    match period {
        0 => Ok(INFINITE_PERIOD),
        p if p > 0 => Ok(p),
        p => {
            tracing::warn!(axis = name, period = p, "rejected negative period");
            Err(NoiseError::InvalidParameter {
                name,
                value: p,
                reason: "must be zero (no tiling) or positive",
            })
        }
    }
}

const fn finite_or_zero(period: i32) -> i32 {
    if period == INFINITE_PERIOD {
        0
    } else {
        period
    }
}
