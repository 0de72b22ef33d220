//! Core types for the draft-04 schema model.

use serde_json::Value;

/// JSON boolean.
pub type Boolean = bool;
/// 32-bit signed integer.
pub type Int32 = i32;
/// 64-bit signed integer.
pub type Int64 = i64;
/// 32-bit float.
pub type Float = f32;
/// 64-bit float.
pub type Double = f64;
/// JSON string.
pub type Text = String;
/// Arbitrary JSON value (used for `default` and `enum` members).
pub type AnyValue = Value;
/// Ordered sequence of strings.
pub type TextSequence = Vec<Text>;
/// Ordered sequence of arbitrary JSON values.
pub type ValueSequence = Vec<AnyValue>;

/// The closed vocabulary of the draft-04 `type` keyword.
pub const SIMPLE_TYPE_NAMES: &[&str] = &[
    "array", "boolean", "integer", "null", "number", "object", "string",
];

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One of the seven primitive type names draft-04 allows in `type`.
///
/// Decoding any other string is an error; this is the only closed
/// vocabulary in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl SimpleType {
    /// Parse a type name from a string.
    ///
    /// Returns `None` for out-of-vocabulary values (caller should error).
    /// Matching is case-sensitive: `"String"` is not a valid type.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "array" => Some(SimpleType::Array),
            "boolean" => Some(SimpleType::Boolean),
            "integer" => Some(SimpleType::Integer),
            "null" => Some(SimpleType::Null),
            "number" => Some(SimpleType::Number),
            "object" => Some(SimpleType::Object),
            "string" => Some(SimpleType::String),
            _ => None,
        }
    }

    /// Returns the wire name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleType::Array => "array",
            SimpleType::Boolean => "boolean",
            SimpleType::Integer => "integer",
            SimpleType::Null => "null",
            SimpleType::Number => "number",
            SimpleType::Object => "object",
            SimpleType::String => "string",
        }
    }
}

impl std::fmt::Display for SimpleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for schema decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum schema nesting depth before decode fails with
    /// [`DecodeError::TooDeep`](crate::DecodeError::TooDeep).
    /// Bounds stack use on hostile input; the model itself is unbounded.
    ///
    /// The default is 60. One schema level through `properties` spends two
    /// JSON nesting levels, and serde_json's parser stops at 128, so any
    /// document within this ceiling also parses at the byte entry point.
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Create decode options with the default depth ceiling.
    pub fn new() -> Self {
        Self { max_depth: 60 }
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
