//! # Golident Core
//!
//! Deterministic identicon generation from arbitrary strings.
//!
//! This crate contains the whole generation pipeline:
//! - Seed derivation (SHA-256 digest seeding a ChaCha8 generator)
//! - Random board initialization
//! - Conway's Game of Life on a torus, with full history
//! - History compression into a last-true-index field
//! - Normalization into [0, 255] and mirror tiling
//! - Seed-derived color gradients and colormaps
//!
//! ## Architecture
//!
//! Each stage is a pure function of the previous stage's output:
//! - **Single generator**: one seeded generator, drawn board-first then colors
//! - **Allocate-new transforms**: flips, tiling and stepping never alias input
//! - **Parallel per-cell work**: Rayon row chunks inside a step (feature `parallel`)
//!
//! ## Example
//!
//! ```
//! use golident_core::{Identicon, IdenticonConfig};
//!
//! let config = IdenticonConfig::new(16, 40, 5);
//! let ident = Identicon::build("hello", &config).unwrap();
//!
//! assert_eq!(ident.array().shape(), (32, 32));
//! assert_eq!(ident.gradient().len(), 5);
//! ```

/// Game of Life stepping and history recording
pub mod automaton;
/// Random board initialization
pub mod board;
/// Last-true-index history compression
pub mod compress;
/// Configuration management for generation and rendering
pub mod config;
/// Error types and result alias
pub mod error;
/// Color gradients and colormaps
pub mod gradient;
/// Contiguous history buffer
pub mod history;
/// Pipeline assembly
pub mod identicon;
/// Stage timing and logging setup
pub mod metrics;
/// Rescaling into [0, 255]
pub mod normalize;
/// Seed derivation and the pinned generator
pub mod seed;
/// Mirror tiling
pub mod tile;

pub use config::{AppConfig, FrameNormalization, IdenticonConfig};
pub use error::{IdenticonError, Result};
pub use gradient::{ColorGradient, Colormap};
pub use history::History;
pub use identicon::{build, Identicon};
pub use metrics::init_logging;
pub use seed::{Seed, SeededRng};
pub use golident_data::{Board, ControlPoint, Field, Grid, Intensity, Rgb};
