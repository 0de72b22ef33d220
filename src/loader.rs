//! Schema loading from files and strings.

use std::path::Path;

use crate::codec::decode_schema;
use crate::error::{DecodeError, LoadError};
use crate::schema::Schema;

/// Load and decode a schema document from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// `LoadError::ReadError` if it can't be read, or a wrapped `DecodeError`
/// for malformed content.
pub fn load_schema_file(path: &Path) -> Result<Schema, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decode_schema(&content)?)
}

/// Decode a schema document from a JSON string.
///
/// # Errors
///
/// Returns `DecodeError::InvalidJson` if the string isn't valid JSON, or a
/// path-attributed decode error for bad fields.
pub fn load_schema_str(content: &str) -> Result<Schema, DecodeError> {
    decode_schema(content.as_bytes())
}
