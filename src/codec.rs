//! Decode/encode engine for the schema model.
//!
//! Decoding walks a generic [`serde_json::Value`] tree and routes each
//! recognized keyword to its field decoder; unknown keywords are skipped so
//! documents carrying vendor extensions still parse. Any recognized keyword
//! that fails to decode aborts the whole decode, attributed to that
//! keyword's path. Fields already decoded are never corrupted by a later
//! failure.
//!
//! Encoding is the exact inverse: set fields are emitted under their
//! canonical wire keys in a fixed order, unset fields contribute no key at
//! all. `preserve_order` on serde_json keeps the insertion order stable.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{DecodeError, EncodeError};
use crate::schema::{BoolOrSchema, Dependency, Items, Schema, SchemaMap, TypeSet};
use crate::types::{json_type_name, DecodeOptions, SimpleType};

/// Decode a draft-04 schema document from raw JSON bytes.
///
/// Uses the default [`DecodeOptions`]. This is the sole byte-level
/// ingestion entry point.
///
/// # Errors
///
/// Returns `DecodeError::InvalidJson` if the bytes are not valid JSON, or a
/// path-attributed error for the first recognized field that fails.
pub fn decode_schema(bytes: &[u8]) -> Result<Schema, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|source| DecodeError::InvalidJson { source })?;
    decode_schema_value(&value, &DecodeOptions::default())
}

/// Decode a schema from an already-parsed JSON value.
///
/// # Errors
///
/// Returns a path-attributed `DecodeError` for the first field that fails,
/// or `DecodeError::TooDeep` if nesting exceeds `options.max_depth`.
pub fn decode_schema_value(value: &Value, options: &DecodeOptions) -> Result<Schema, DecodeError> {
    decode_at(value, "", 0, options)
}

/// Encode a schema back to JSON bytes.
///
/// # Errors
///
/// Returns `EncodeError::EmptySchema` if the schema (or any nested schema)
/// has no fields set.
pub fn encode_schema(schema: &Schema) -> Result<Vec<u8>, EncodeError> {
    let value = encode_schema_value(schema)?;
    serde_json::to_vec(&value).map_err(|source| EncodeError::Serialize { source })
}

/// Encode a schema to a JSON value.
///
/// # Errors
///
/// Same conditions as [`encode_schema`].
pub fn encode_schema_value(schema: &Schema) -> Result<Value, EncodeError> {
    encode_at(schema, "")
}

// --- Decoding ---

fn decode_at(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Schema, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::TooDeep {
            path: err_path(path),
            limit: options.max_depth,
        });
    }

    let Value::Object(map) = value else {
        return Err(mismatch(path, "object", value));
    };

    let mut schema = Schema::default();

    for (key, raw) in map {
        let p = format!("{}/{}", path, key);
        match key.as_str() {
            "$ref" => schema.reference = Some(decode_string(raw, &p)?),
            "id" => schema.id = Some(decode_string(raw, &p)?),
            "title" => schema.title = Some(decode_string(raw, &p)?),
            "$schema" => schema.dialect = Some(decode_string(raw, &p)?),
            "description" => schema.description = Some(decode_string(raw, &p)?),
            "pattern" => schema.pattern = Some(decode_string(raw, &p)?),

            "multipleOf" => schema.multiple_of = Some(decode_number(raw, &p)?),
            "maximum" => schema.maximum = Some(decode_number(raw, &p)?),
            "exclusiveMaximum" => schema.exclusive_maximum = Some(decode_bool(raw, &p)?),
            "minimum" => schema.minimum = Some(decode_number(raw, &p)?),
            "exclusiveMinimum" => schema.exclusive_minimum = Some(decode_bool(raw, &p)?),

            "maxLength" => schema.max_length = Some(decode_integer(raw, &p)?),
            "minLength" => schema.min_length = Some(decode_integer(raw, &p)?),
            "maxItems" => schema.max_items = Some(decode_integer(raw, &p)?),
            "minItems" => schema.min_items = Some(decode_integer(raw, &p)?),
            "uniqueItems" => schema.unique_items = Some(decode_bool(raw, &p)?),
            "maxProperties" => schema.max_properties = Some(decode_integer(raw, &p)?),
            "minProperties" => schema.min_properties = Some(decode_integer(raw, &p)?),

            "required" => schema.required = Some(decode_string_array(raw, &p)?),
            // `"default": null` is a present field; don't collapse it to unset.
            "default" => schema.default = Some(raw.clone()),
            "type" => schema.r#type = Some(decode_type_set(raw, &p)?),

            "additionalItems" => {
                schema.additional_items = Some(decode_bool_or_schema(raw, &p, depth, options)?);
            }
            "additionalProperties" => {
                schema.additional_properties = Some(decode_bool_or_schema(raw, &p, depth, options)?);
            }
            "items" => schema.items = Some(decode_items(raw, &p, depth, options)?),

            "definitions" => schema.definitions = Some(decode_schema_map(raw, &p, depth, options)?),
            "properties" => schema.properties = Some(decode_schema_map(raw, &p, depth, options)?),
            "patternProperties" => {
                schema.pattern_properties = Some(decode_schema_map(raw, &p, depth, options)?);
            }

            "allOf" => schema.all_of = Some(decode_schema_array(raw, &p, depth, options)?),
            "anyOf" => schema.any_of = Some(decode_schema_array(raw, &p, depth, options)?),
            "oneOf" => schema.one_of = Some(decode_schema_array(raw, &p, depth, options)?),
            "not" => schema.not = Some(Box::new(decode_at(raw, &p, depth + 1, options)?)),

            "enum" => schema.r#enum = Some(decode_value_array(raw, &p)?),
            "dependencies" => {
                schema.dependencies = Some(decode_dependencies(raw, &p, depth, options)?);
            }

            // Unknown keywords (vendor extensions, newer drafts) are skipped.
            _ => {}
        }
    }

    Ok(schema)
}

/// Error paths are JSON-pointer style; the document root reads as `/`.
fn err_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

fn mismatch(path: &str, expected: &'static str, actual: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        path: err_path(path),
        expected,
        actual: json_type_name(actual),
    }
}

fn decode_string(value: &Value, path: &str) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(path, "string", other)),
    }
}

fn decode_bool(value: &Value, path: &str) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(path, "boolean", other)),
    }
}

/// Numbers keep their source representation (integer stays integer), so
/// re-encoding does not rewrite `200` as `200.0`.
fn decode_number(value: &Value, path: &str) -> Result<serde_json::Number, DecodeError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        other => Err(mismatch(path, "number", other)),
    }
}

fn decode_integer(value: &Value, path: &str) -> Result<i64, DecodeError> {
    value
        .as_i64()
        .ok_or_else(|| mismatch(path, "integer", value))
}

fn decode_string_array(value: &Value, path: &str) -> Result<Vec<String>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(mismatch(path, "array", value));
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        out.push(decode_string(item, &format!("{}/{}", path, i))?);
    }
    Ok(out)
}

fn decode_value_array(value: &Value, path: &str) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(mismatch(path, "array", other)),
    }
}

/// `type`: single name first, then array of names (decode precedence).
///
/// A string outside the closed vocabulary is an `UnknownSimpleType`, not an
/// exhaustion: the single-name alternative structurally matched.
fn decode_type_set(value: &Value, path: &str) -> Result<TypeSet, DecodeError> {
    match value {
        Value::String(s) => SimpleType::parse(s).map(TypeSet::One).ok_or_else(|| {
            DecodeError::UnknownSimpleType {
                path: path.to_string(),
                value: s.clone(),
            }
        }),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}/{}", path, i);
                let name = decode_string(item, &item_path)?;
                let parsed =
                    SimpleType::parse(&name).ok_or_else(|| DecodeError::UnknownSimpleType {
                        path: item_path,
                        value: name,
                    })?;
                out.push(parsed);
            }
            Ok(TypeSet::Many(out))
        }
        other => Err(exhausted(
            path,
            other,
            &[("single type", "string"), ("type array", "array")],
        )),
    }
}

/// `items`: single schema first, then tuple of schemas. Object and array
/// are structurally disjoint, so the order is a convention, not a tiebreak.
fn decode_items(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Items, DecodeError> {
    match value {
        Value::Object(_) => {
            let inner = decode_at(value, path, depth + 1, options)?;
            Ok(Items::Single(Box::new(inner)))
        }
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(decode_at(item, &format!("{}/{}", path, i), depth + 1, options)?);
            }
            Ok(Items::Tuple(out))
        }
        other => Err(exhausted(
            path,
            other,
            &[("single schema", "object"), ("schema tuple", "array")],
        )),
    }
}

/// `additionalProperties` / `additionalItems`: boolean first, then schema.
fn decode_bool_or_schema(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<BoolOrSchema, DecodeError> {
    match value {
        Value::Bool(b) => Ok(BoolOrSchema::Flag(*b)),
        Value::Object(_) => {
            let inner = decode_at(value, path, depth + 1, options)?;
            Ok(BoolOrSchema::Constraint(Box::new(inner)))
        }
        other => Err(exhausted(
            path,
            other,
            &[("boolean flag", "boolean"), ("schema", "object")],
        )),
    }
}

/// A `dependencies` map value: property-name list first, then schema.
fn decode_dependency(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Dependency, DecodeError> {
    match value {
        Value::Array(_) => Ok(Dependency::Required(decode_string_array(value, path)?)),
        Value::Object(_) => {
            let inner = decode_at(value, path, depth + 1, options)?;
            Ok(Dependency::Schema(Box::new(inner)))
        }
        other => Err(exhausted(
            path,
            other,
            &[("property list", "array"), ("schema", "object")],
        )),
    }
}

fn decode_dependencies(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<BTreeMap<String, Dependency>, DecodeError> {
    let Value::Object(map) = value else {
        return Err(mismatch(path, "object", value));
    };
    let mut out = BTreeMap::new();
    for (name, dep) in map {
        let dep_path = format!("{}/{}", path, name);
        out.insert(name.clone(), decode_dependency(dep, &dep_path, depth, options)?);
    }
    Ok(out)
}

fn decode_schema_map(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<SchemaMap, DecodeError> {
    let Value::Object(map) = value else {
        return Err(mismatch(path, "object", value));
    };
    let mut out = SchemaMap::new();
    for (name, nested) in map {
        let nested_path = format!("{}/{}", path, name);
        out.insert(name.clone(), decode_at(nested, &nested_path, depth + 1, options)?);
    }
    Ok(out)
}

fn decode_schema_array(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Schema>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(mismatch(path, "array", value));
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        out.push(decode_at(item, &format!("{}/{}", path, i), depth + 1, options)?);
    }
    Ok(out)
}

/// Build a `UnionExhausted` error listing every alternative and why it
/// failed against the actual value.
fn exhausted(path: &str, actual: &Value, alternatives: &[(&str, &str)]) -> DecodeError {
    let got = json_type_name(actual);
    DecodeError::UnionExhausted {
        path: path.to_string(),
        attempts: alternatives
            .iter()
            .map(|(name, expected)| format!("{}: expected {}, got {}", name, expected, got))
            .collect(),
    }
}

// --- Encoding ---

fn encode_at(schema: &Schema, path: &str) -> Result<Value, EncodeError> {
    let mut out = Map::new();

    // Wire keys in fixed declaration order; `$ref` and `$schema` are the
    // two keys whose wire name differs from the field name.
    if let Some(v) = &schema.reference {
        out.insert("$ref".to_string(), Value::String(v.clone()));
    }
    if let Some(v) = &schema.id {
        out.insert("id".to_string(), Value::String(v.clone()));
    }
    if let Some(v) = &schema.title {
        out.insert("title".to_string(), Value::String(v.clone()));
    }
    if let Some(v) = &schema.dialect {
        out.insert("$schema".to_string(), Value::String(v.clone()));
    }
    if let Some(v) = &schema.description {
        out.insert("description".to_string(), Value::String(v.clone()));
    }
    if let Some(v) = &schema.pattern {
        out.insert("pattern".to_string(), Value::String(v.clone()));
    }

    if let Some(v) = &schema.multiple_of {
        out.insert("multipleOf".to_string(), Value::Number(v.clone()));
    }
    if let Some(v) = &schema.maximum {
        out.insert("maximum".to_string(), Value::Number(v.clone()));
    }
    if let Some(v) = schema.exclusive_maximum {
        out.insert("exclusiveMaximum".to_string(), Value::Bool(v));
    }
    if let Some(v) = &schema.minimum {
        out.insert("minimum".to_string(), Value::Number(v.clone()));
    }
    if let Some(v) = schema.exclusive_minimum {
        out.insert("exclusiveMinimum".to_string(), Value::Bool(v));
    }

    if let Some(v) = schema.max_length {
        out.insert("maxLength".to_string(), Value::from(v));
    }
    if let Some(v) = schema.min_length {
        out.insert("minLength".to_string(), Value::from(v));
    }
    if let Some(v) = schema.max_items {
        out.insert("maxItems".to_string(), Value::from(v));
    }
    if let Some(v) = schema.min_items {
        out.insert("minItems".to_string(), Value::from(v));
    }
    if let Some(v) = schema.unique_items {
        out.insert("uniqueItems".to_string(), Value::Bool(v));
    }
    if let Some(v) = schema.max_properties {
        out.insert("maxProperties".to_string(), Value::from(v));
    }
    if let Some(v) = schema.min_properties {
        out.insert("minProperties".to_string(), Value::from(v));
    }

    if let Some(v) = &schema.required {
        out.insert("required".to_string(), string_array(v));
    }
    if let Some(v) = &schema.default {
        out.insert("default".to_string(), v.clone());
    }
    if let Some(v) = &schema.r#type {
        out.insert("type".to_string(), encode_type_set(v));
    }

    if let Some(v) = &schema.additional_items {
        let p = format!("{}/additionalItems", path);
        out.insert("additionalItems".to_string(), encode_bool_or_schema(v, &p)?);
    }
    if let Some(v) = &schema.additional_properties {
        let p = format!("{}/additionalProperties", path);
        out.insert("additionalProperties".to_string(), encode_bool_or_schema(v, &p)?);
    }
    if let Some(v) = &schema.items {
        let p = format!("{}/items", path);
        out.insert("items".to_string(), encode_items(v, &p)?);
    }

    if let Some(v) = &schema.definitions {
        let p = format!("{}/definitions", path);
        out.insert("definitions".to_string(), encode_schema_map(v, &p)?);
    }
    if let Some(v) = &schema.properties {
        let p = format!("{}/properties", path);
        out.insert("properties".to_string(), encode_schema_map(v, &p)?);
    }
    if let Some(v) = &schema.pattern_properties {
        let p = format!("{}/patternProperties", path);
        out.insert("patternProperties".to_string(), encode_schema_map(v, &p)?);
    }

    if let Some(v) = &schema.all_of {
        let p = format!("{}/allOf", path);
        out.insert("allOf".to_string(), encode_schema_array(v, &p)?);
    }
    if let Some(v) = &schema.any_of {
        let p = format!("{}/anyOf", path);
        out.insert("anyOf".to_string(), encode_schema_array(v, &p)?);
    }
    if let Some(v) = &schema.one_of {
        let p = format!("{}/oneOf", path);
        out.insert("oneOf".to_string(), encode_schema_array(v, &p)?);
    }
    if let Some(v) = &schema.not {
        let p = format!("{}/not", path);
        out.insert("not".to_string(), encode_at(v, &p)?);
    }

    if let Some(v) = &schema.r#enum {
        out.insert("enum".to_string(), Value::Array(v.clone()));
    }
    if let Some(v) = &schema.dependencies {
        let p = format!("{}/dependencies", path);
        out.insert("dependencies".to_string(), encode_dependencies(v, &p)?);
    }

    if out.is_empty() {
        return Err(EncodeError::EmptySchema {
            path: err_path(path),
        });
    }

    Ok(Value::Object(out))
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

fn encode_type_set(set: &TypeSet) -> Value {
    match set {
        TypeSet::One(t) => Value::String(t.as_str().to_string()),
        TypeSet::Many(types) => Value::Array(
            types
                .iter()
                .map(|t| Value::String(t.as_str().to_string()))
                .collect(),
        ),
    }
}

fn encode_items(items: &Items, path: &str) -> Result<Value, EncodeError> {
    match items {
        Items::Single(schema) => encode_at(schema, path),
        Items::Tuple(schemas) => encode_schemas(schemas, path),
    }
}

fn encode_bool_or_schema(value: &BoolOrSchema, path: &str) -> Result<Value, EncodeError> {
    match value {
        BoolOrSchema::Flag(b) => Ok(Value::Bool(*b)),
        BoolOrSchema::Constraint(schema) => encode_at(schema, path),
    }
}

fn encode_schema_map(map: &SchemaMap, path: &str) -> Result<Value, EncodeError> {
    let mut out = Map::new();
    for (name, schema) in map {
        let nested = encode_at(schema, &format!("{}/{}", path, name))?;
        out.insert(name.clone(), nested);
    }
    Ok(Value::Object(out))
}

fn encode_schema_array(schemas: &[Schema], path: &str) -> Result<Value, EncodeError> {
    encode_schemas(schemas, path)
}

fn encode_schemas(schemas: &[Schema], path: &str) -> Result<Value, EncodeError> {
    let mut out = Vec::with_capacity(schemas.len());
    for (i, schema) in schemas.iter().enumerate() {
        out.push(encode_at(schema, &format!("{}/{}", path, i))?);
    }
    Ok(Value::Array(out))
}

fn encode_dependencies(
    deps: &BTreeMap<String, Dependency>,
    path: &str,
) -> Result<Value, EncodeError> {
    let mut out = Map::new();
    for (name, dep) in deps {
        let value = match dep {
            Dependency::Required(names) => string_array(names),
            Dependency::Schema(schema) => encode_at(schema, &format!("{}/{}", path, name))?,
        };
        out.insert(name.clone(), value);
    }
    Ok(Value::Object(out))
}
