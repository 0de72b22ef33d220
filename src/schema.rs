//! The draft-04 schema entity and its one-of union fields.
//!
//! Draft-04 lets several keywords take more than one JSON shape (`type` is a
//! string or an array of strings, `items` is a schema or an array of schemas,
//! and so on). Each such keyword is modeled as an enum so that exactly one
//! alternative is populated by construction; "both set" and "neither set" are
//! unrepresentable.
//!
//! Nested schemas are exclusively owned (`Box`, `Vec`, `BTreeMap`): the
//! structure is a tree, never a graph. `$ref` strings are the only way a
//! document points back at an ancestor or sibling, and they stay opaque.

use std::collections::BTreeMap;

use serde_json::Number;

use crate::types::{AnyValue, Boolean, Int64, SimpleType, Text, TextSequence, ValueSequence};

/// The `type` keyword: a single type name or an ordered list of them.
///
/// Decode tries the single form first; see the codec for the precedence
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSet {
    One(SimpleType),
    Many(Vec<SimpleType>),
}

/// The `items` keyword: one schema applied uniformly, or a positional tuple
/// of schemas applied per index.
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    Single(Box<Schema>),
    Tuple(Vec<Schema>),
}

/// The `additionalProperties` / `additionalItems` keywords.
///
/// `false` forbids extra members, `true` permits them unconstrained, and a
/// schema constrains them structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolOrSchema {
    Flag(Boolean),
    Constraint(Box<Schema>),
}

/// A value of the `dependencies` map: either a list of property names that
/// must be present together (property dependency) or a schema the instance
/// must additionally satisfy (schema dependency).
#[derive(Debug, Clone, PartialEq)]
pub enum Dependency {
    Required(TextSequence),
    Schema(Box<Schema>),
}

/// Mapping from member name to nested schema, as used by `definitions`,
/// `properties` and `patternProperties`. `BTreeMap` gives deterministic
/// (alphabetical) entry order when re-encoding.
pub type SchemaMap = BTreeMap<Text, Schema>;

/// A draft-04 JSON Schema document (or any nested schema within one).
///
/// Every field is optional, and absence is meaningful: a field that was not
/// present in the source decodes to `None` and re-encodes to no key at all.
/// `None` is never conflated with a falsy or empty value (`"minItems": 0`
/// decodes to `Some(0)`).
///
/// Values are produced by [`decode_schema`](crate::decode_schema) and are
/// not mutated afterwards; there is no builder or mutation API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    /// `$ref`: opaque reference string, never resolved here.
    pub reference: Option<Text>,
    pub id: Option<Text>,
    pub title: Option<Text>,
    /// `$schema`: URI of the dialect the document claims to follow.
    pub dialect: Option<Text>,
    pub description: Option<Text>,
    /// ECMA-262 regex source text; not compiled or checked here.
    pub pattern: Option<Text>,

    /// Numeric constraints keep the source's `serde_json::Number`, so an
    /// integer-valued `"maximum": 200` re-encodes as `200`, not `200.0`.
    pub multiple_of: Option<Number>,
    pub maximum: Option<Number>,
    pub exclusive_maximum: Option<Boolean>,
    pub minimum: Option<Number>,
    pub exclusive_minimum: Option<Boolean>,

    pub max_length: Option<Int64>,
    pub min_length: Option<Int64>,
    pub max_items: Option<Int64>,
    pub min_items: Option<Int64>,
    pub unique_items: Option<Boolean>,
    pub max_properties: Option<Int64>,
    pub min_properties: Option<Int64>,

    pub required: Option<TextSequence>,
    /// `default` may legitimately be JSON `null`; `Some(Value::Null)` and
    /// `None` are distinct states.
    pub default: Option<AnyValue>,
    pub r#type: Option<TypeSet>,

    pub additional_items: Option<BoolOrSchema>,
    pub additional_properties: Option<BoolOrSchema>,
    pub items: Option<Items>,

    pub definitions: Option<SchemaMap>,
    pub properties: Option<SchemaMap>,
    pub pattern_properties: Option<SchemaMap>,

    pub all_of: Option<Vec<Schema>>,
    pub any_of: Option<Vec<Schema>>,
    pub one_of: Option<Vec<Schema>>,
    pub not: Option<Box<Schema>>,

    pub r#enum: Option<ValueSequence>,
    pub dependencies: Option<BTreeMap<Text, Dependency>>,
}

impl Schema {
    /// True if no field is set.
    ///
    /// An empty schema decodes fine (from `{}`) but is rejected by encode;
    /// see [`EncodeError::EmptySchema`](crate::EncodeError::EmptySchema).
    pub fn is_empty(&self) -> bool {
        *self == Schema::default()
    }
}
