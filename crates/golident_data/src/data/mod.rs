//! Core data structures for identicon generation.

pub mod color;
pub mod grid;
