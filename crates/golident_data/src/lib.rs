//! # Golident Data
//!
//! Plain data shared by every golident crate: row-major grids and the color
//! types handed to rendering collaborators. Logic lives in `golident_core`.

pub mod data;

pub use data::color::{ControlPoint, Rgb};
pub use data::grid::{Board, Field, Grid, Intensity};
