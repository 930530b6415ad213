//! # Cubic Noise
//!
//! Deterministic smooth value noise for terrain, textures and simulations.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same parameters always produce the same samples
//! 2. **Tileable**: Optional per-axis periods wrap the lattice exactly
//! 3. **Stateless sampling**: `&self` only, no allocation, thread-safe
//!
//! ## Core Components
//!
//! - `lattice`: 32-bit wrapping positional hash and period tiling
//! - `interpolate`: four-point cubic blend
//! - `CubicNoise`: 1D/2D sampler with octave scaling
//! - `NoiseConfig`: TOML-loadable sampler parameters
//!
//! Fractal layering is left to callers.
//!
//! ## Example
//!
//! ```rust
//! use cubic_noise::NoiseConfig;
//!
//! let config = NoiseConfig::from_toml_str("seed = 99\noctave = 8\nperiod_x = 4")?;
//! let noise = config.build()?;
//!
//! // Tiles every period_x * octave units along X.
//! assert!((noise.sample_1d(45.0) - noise.sample_1d(45.0 + 32.0)).abs() < 1e-9);
//! # Ok::<(), cubic_noise::NoiseError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod interpolate;
pub mod lattice;
pub mod sampler;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use sampler::{CubicNoise, INFINITE_PERIOD};
