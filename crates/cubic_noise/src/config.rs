//! # Noise Configuration
//!
//! Sampler parameters as plain data, loaded from TOML once at startup.
//!
//! ```toml
//! seed = 1337
//! octave = 16
//! period_x = 8   # 0 or omitted = no tiling
//! period_y = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::sampler::CubicNoise;

/// Unvalidated sampler parameters.
///
/// Missing fields fall back to [`NoiseConfig::default`]. Validation happens
/// in [`NoiseConfig::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Hash seed.
    pub seed: i32,
    /// Scale divisor, must be positive.
    pub octave: i32,
    /// X period in lattice cells; 0 disables tiling.
    pub period_x: i32,
    /// Y period in lattice cells; 0 disables tiling.
    pub period_y: i32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octave: 1,
            period_x: 0,
            period_y: 0,
        }
    }
}

impl NoiseConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidConfig`] on malformed TOML, unknown keys, or
    /// values outside `i32`.
    pub fn from_toml_str(text: &str) -> NoiseResult<Self> {
        toml::from_str(text).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// [`NoiseError::ConfigIo`] if the file cannot be read, otherwise as
    /// [`NoiseConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> NoiseResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| NoiseError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded noise config");
        Ok(config)
    }

    /// Serializes the config to TOML.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidConfig`] if serialization fails.
    pub fn to_toml_string(&self) -> NoiseResult<String> {
        toml::to_string(self).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }

    /// Validates the parameters and creates the sampler.
    ///
    /// # Errors
    ///
    /// See [`CubicNoise::new`].
    pub fn build(&self) -> NoiseResult<CubicNoise> {
        CubicNoise::new(self.seed, self.octave, self.period_x, self.period_y)
    }
}

impl TryFrom<NoiseConfig> for CubicNoise {
    type Error = NoiseError;

    fn try_from(config: NoiseConfig) -> NoiseResult<Self> {
        config.build()
    }
}
