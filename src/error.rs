//! Error types for schema decoding, encoding and loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::SIMPLE_TYPE_NAMES;

/// Errors during schema decoding.
///
/// Every data error carries the JSON-pointer-style path of the offending
/// field (`/` for the document root, `/properties/id/type` for nested
/// fields) so callers can report exactly where a document went wrong.
#[derive(Debug, Error)]
pub enum DecodeError {
    // Parse errors: the input is not JSON at all.
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unknown simple type \"{value}\" at {path}: expected one of {}", SIMPLE_TYPE_NAMES.join(", "))]
    UnknownSimpleType { path: String, value: String },

    #[error("{path}: no union alternative matched: {}", attempts.join("; "))]
    UnionExhausted {
        path: String,
        /// One entry per attempted alternative, stating why it failed.
        attempts: Vec<String>,
    },

    // Resource limit, distinct from malformed input.
    #[error("{path}: schema nesting exceeds {limit} levels")]
    TooDeep { path: String, limit: usize },
}

impl DecodeError {
    /// Returns the path of the offending field, if the error is attributable
    /// to one (`None` for document-level JSON syntax errors).
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::InvalidJson { .. } => None,
            DecodeError::TypeMismatch { path, .. }
            | DecodeError::UnknownSimpleType { path, .. }
            | DecodeError::UnionExhausted { path, .. }
            | DecodeError::TooDeep { path, .. } => Some(path),
        }
    }

    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors during schema encoding.
///
/// Unions are enums, so "no populated alternative" cannot arise here; the
/// only data error is the empty-schema policy below.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The schema (or a nested schema at `path`) has no fields set.
    /// An all-unset schema is not a valid encode target.
    #[error("{path}: schema has no fields set, nothing to encode")]
    EmptySchema { path: String },

    #[error("failed to serialize schema: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl EncodeError {
    /// Returns the path of the offending schema, if the error is
    /// attributable to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            EncodeError::EmptySchema { path } => Some(path),
            EncodeError::Serialize { .. } => None,
        }
    }

    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors when loading a schema from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Data errors (exit code 2)
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::Decode(e) => e.exit_code(),
        }
    }
}
