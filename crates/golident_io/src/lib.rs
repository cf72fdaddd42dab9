//! # Golident IO
//!
//! I/O layer around the identicon pipeline.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers
//! - The exported identicon document and its verification

/// Identicon documents: export, import and reproduction checks
pub mod document;
/// Error types and result aliases for I/O operations
pub mod error;
/// Validated JSON helpers
pub mod serialization;

pub use document::{verify_document, FrameSet, IdenticonDocument, FORMAT_VERSION};
pub use error::{IoError, Result};
pub use serialization::{
    from_json, read_json_file, to_json, to_json_pretty, write_json_file, write_json_to,
};
