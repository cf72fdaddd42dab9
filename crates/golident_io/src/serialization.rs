//! JSON serialization with validation.

use crate::error::{IoError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Serializes data to compact JSON.
///
/// # Parameters
/// - `data`: Value to serialize
///
/// # Returns
/// The JSON text, or `IoError::Serialization` if serde rejects the value.
pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Serializes data to indented JSON, the layout used for documents on disk.
///
/// # Parameters
/// - `data`: Value to serialize
///
/// # Returns
/// The pretty-printed JSON text, or `IoError::Serialization`.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Deserializes data from a JSON string.
///
/// # Parameters
/// - `json`: JSON text; blank input is rejected before parsing
///
/// # Returns
/// The decoded value, `IoError::Validation` for blank input, or
/// `IoError::Serialization` for malformed JSON.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

/// Writes pretty JSON plus a trailing newline to any writer.
///
/// # Parameters
/// - `data`: Value to serialize
/// - `writer`: Destination, flushed before returning
///
/// # Returns
/// `Ok(())`, or the serialization or I/O error that stopped the write.
pub fn write_json_to<T, W>(data: &T, mut writer: W) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes pretty JSON to `path`.
///
/// The data goes to a sibling `.tmp` file first and is renamed into place, so
/// an interrupted write never leaves a truncated document behind.
///
/// # Parameters
/// - `data`: Value to serialize
/// - `path`: Final file location
///
/// # Returns
/// `Ok(())`, or `IoError::Context` wrapping the filesystem failure.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = to_json_pretty(data)?;
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, json)
        .and_then(|()| std::fs::rename(&tmp_path, path))
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path)))?;
    tracing::debug!(path = %path.display(), "JSON written");
    Ok(())
}

/// Reads and deserializes a JSON file.
///
/// # Parameters
/// - `path`: File to read
///
/// # Returns
/// The decoded value. Filesystem failures carry the path as context;
/// content errors are the same as [`from_json`].
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}
