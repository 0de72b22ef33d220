//! JSON Schema AST
//!
//! A round-trippable in-memory model of JSON Schema draft-04 documents, the
//! dialect used by OpenAPI v3 tooling.
//!
//! Every keyword that draft-04 allows to take more than one JSON shape
//! decodes into a typed one-of value ([`TypeSet`], [`Items`],
//! [`BoolOrSchema`], [`Dependency`]) and re-encodes to the shape it was read
//! from. Absent fields stay absent: decoding never defaults a missing
//! keyword, and encoding omits unset fields entirely, so `"minItems": 0`
//! and no `minItems` at all remain distinguishable.
//!
//! `$ref` values are opaque strings; this crate does not resolve references
//! and does not validate instances against schemas.
//!
//! # Example
//!
//! ```
//! use jsonschema_ast::{decode_schema, encode_schema, SimpleType, TypeSet};
//!
//! let schema = decode_schema(br#"{
//!     "type": "object",
//!     "properties": { "id": { "type": "integer" } },
//!     "required": ["id"]
//! }"#).unwrap();
//!
//! assert_eq!(schema.r#type, Some(TypeSet::One(SimpleType::Object)));
//! assert_eq!(schema.required.as_deref(), Some(&["id".to_string()][..]));
//!
//! let id = &schema.properties.as_ref().unwrap()["id"];
//! assert_eq!(id.r#type, Some(TypeSet::One(SimpleType::Integer)));
//!
//! // Re-encoding reproduces exactly the fields that were set.
//! let bytes = encode_schema(&schema).unwrap();
//! let again = decode_schema(&bytes).unwrap();
//! assert_eq!(schema, again);
//! ```

mod codec;
mod error;
mod loader;
mod schema;
mod types;

pub use codec::{decode_schema, decode_schema_value, encode_schema, encode_schema_value};
pub use error::{DecodeError, EncodeError, LoadError};
pub use loader::{load_schema_file, load_schema_str};
pub use schema::{BoolOrSchema, Dependency, Items, Schema, SchemaMap, TypeSet};
pub use types::{
    json_type_name, AnyValue, Boolean, DecodeOptions, Double, Float, Int32, Int64, SimpleType,
    Text, TextSequence, ValueSequence, SIMPLE_TYPE_NAMES,
};
