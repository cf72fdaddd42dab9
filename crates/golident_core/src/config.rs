//! Configuration management for identicon generation.
//!
//! Strongly-typed structures mapping to a `golident.toml` file. Every key is
//! optional; missing keys fall back to the defaults below.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. Config file (overrides defaults)
//! 3. Command-line flags (override the file)
//!
//! ## Example `golident.toml`
//!
//! ```toml
//! [identicon]
//! size = 64
//! iterations = 320
//! num_colors = 5
//!
//! [render]
//! lut_size = 256
//! include_pixels = false
//! include_frames = false
//! frame_normalization = "per_frame"
//!
//! [logging]
//! level = "info"
//! ```

use crate::error::{IdenticonError, Result};
use crate::gradient::DEFAULT_LUT_SIZE;
use serde::{Deserialize, Serialize};

/// Pipeline parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct IdenticonConfig {
    /// Board side length; the identicon is `2 * size` square.
    pub size: usize,
    /// Automaton steps; the history holds `iterations + 1` boards.
    pub iterations: usize,
    /// Gradient control points.
    pub num_colors: usize,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            size: 64,
            iterations: 320,
            num_colors: 5,
        }
    }
}

impl IdenticonConfig {
    pub fn new(size: usize, iterations: usize, num_colors: usize) -> Self {
        Self {
            size,
            iterations,
            num_colors,
        }
    }

    /// Rejects non-positive `size` and `num_colors`. `iterations` is unsigned,
    /// so every value (including 0) is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(IdenticonError::invalid_configuration(
                "size must be a positive integer",
            ));
        }
        if self.num_colors == 0 {
            return Err(IdenticonError::invalid_configuration(
                "num_colors must be a positive integer",
            ));
        }
        Ok(())
    }

    /// Cell count of the `(iterations + 1, size, size)` history buffer, or
    /// `ResourceExhaustion` when it does not fit in `usize`.
    pub fn history_cells(&self) -> Result<usize> {
        let exhausted = || {
            IdenticonError::exhaustion(self.iterations.saturating_add(1), self.size, self.size)
        };
        let frames = self.iterations.checked_add(1).ok_or_else(exhausted)?;
        frames
            .checked_mul(self.size)
            .and_then(|n| n.checked_mul(self.size))
            .ok_or_else(exhausted)
    }
}

/// How animation frames are scaled into [0, 255].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrameNormalization {
    /// Each frame against its own min/max.
    #[default]
    PerFrame,
    /// Every frame against the min/max over the whole sequence.
    Global,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Colormap lookup table resolution.
    pub lut_size: usize,
    /// Attach the RGB pixel grid to exported documents.
    pub include_pixels: bool,
    /// Attach per-step animation frames to exported documents.
    pub include_frames: bool,
    pub frame_normalization: FrameNormalization,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lut_size: DEFAULT_LUT_SIZE,
            include_pixels: false,
            include_frames: false,
            frame_normalization: FrameNormalization::PerFrame,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`. `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub identicon: IdenticonConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - `size` and `num_colors` must be positive
    /// - `lut_size` must be at least 2
    /// - `logging.level` must name a tracing level
    pub fn validate(&self) -> Result<()> {
        self.identicon.validate()?;

        if self.render.lut_size < 2 {
            return Err(IdenticonError::invalid_configuration(
                "render.lut_size must be at least 2",
            ));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(IdenticonError::invalid_configuration(format!(
                "unknown log level {:?}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// SHA-256 over the parameters that affect pixel output.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.identicon).as_bytes());
        hasher.update(self.render.lut_size.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}
