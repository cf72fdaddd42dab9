//! `golident`: deterministic Game of Life identicons.
//!
//! The generation pipeline lives in [`golident_core`], export and verification
//! in [`golident_io`]. This crate adds the command-line front end.

pub mod cli;
pub mod commands;

pub use golident_core::{build, AppConfig, ColorGradient, Identicon, IdenticonConfig};
pub use golident_io::{verify_document, IdenticonDocument};
