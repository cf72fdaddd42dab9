//! Error types for golident_core.
//!
//! Every failure is detected either while validating inputs or while
//! allocating the history buffer; nothing partial is ever returned.

use thiserror::Error;

/// Main error type for identicon generation.
#[derive(Error, Debug)]
pub enum IdenticonError {
    /// Non-positive size or color count, unknown log level, bad LUT size
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// History buffer `(frames, rows, cols)` overflows or cannot be allocated
    #[error("Cannot allocate history buffer of {frames} x {rows} x {cols} cells")]
    ResourceExhaustion {
        frames: usize,
        rows: usize,
        cols: usize,
    },

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML rendering errors
    #[error("Config render error: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// Grid data whose dimensions do not line up
    #[error("Shape mismatch: {0}")]
    Shape(String),
}

/// Result type alias for golident_core operations.
pub type Result<T> = std::result::Result<T, IdenticonError>;

impl IdenticonError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a new shape mismatch error.
    #[must_use]
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Self::Shape(msg.into())
    }

    #[must_use]
    pub fn exhaustion(frames: usize, rows: usize, cols: usize) -> Self {
        Self::ResourceExhaustion { frames, rows, cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IdenticonError::invalid_configuration("size must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: size must be positive"
        );
    }

    #[test]
    fn test_exhaustion_display() {
        let err = IdenticonError::exhaustion(321, 64, 64);
        assert!(err.to_string().contains("321 x 64 x 64"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: IdenticonError = toml_err.into();
        assert!(matches!(err, IdenticonError::Config(_)));
    }
}
