//! Bidirectional key translation between the internal snake_case
//! representation and the external camelCase exchange format.
//!
//! The translation is structural: it recurses through objects and arrays
//! and rewrites every object key, leaving scalar values untouched. A small
//! set of keys does not follow the mechanical rule in the external format
//! and is translated through a fixed exception table instead. Input trees
//! originate from deserialized documents and are therefore acyclic.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key pairs exempt from the mechanical rule, internal name first.
///
/// - `groundwater_recharge`: the external format keeps snake_case for this
///   one field.
/// - `Fmeas_area`: external-only key, never rewritten.
/// - `water_quality`: the external targets section uses the concatenated
///   form, not `waterQuality`.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("groundwater_recharge", "groundwater_recharge"),
    ("Fmeas_area", "Fmeas_area"),
    ("water_quality", "waterquality"),
];

lazy_static! {
    static ref TO_EXTERNAL: HashMap<&'static str, &'static str> =
        EXCEPTIONS.iter().copied().collect();
    static ref TO_INTERNAL: HashMap<&'static str, &'static str> =
        EXCEPTIONS.iter().map(|(i, e)| (*e, *i)).collect();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldMappingError {
    /// The key would not survive the inverse conversion.
    #[error("Field name cannot be mapped reversibly: {0}")]
    Irreversible(String),
}

type Result<T> = std::result::Result<T, FieldMappingError>;

/// Mechanical snake_case -> camelCase: split on `_`, keep the first
/// segment, capitalize the first letter of each subsequent segment.
fn snake_to_camel(key: &str) -> String {
    let mut segments = key.split('_');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Mechanical camelCase -> snake_case: prefix every ASCII uppercase with
/// `_` and lowercase it.
fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn external_key(key: &str) -> Result<String> {
    if let Some(mapped) = TO_EXTERNAL.get(key) {
        return Ok((*mapped).to_string());
    }
    let mapped = snake_to_camel(key);
    if camel_to_snake(&mapped) != key {
        return Err(FieldMappingError::Irreversible(key.to_string()));
    }
    Ok(mapped)
}

fn internal_key(key: &str) -> Result<String> {
    if let Some(mapped) = TO_INTERNAL.get(key) {
        return Ok((*mapped).to_string());
    }
    let mapped = camel_to_snake(key);
    if snake_to_camel(&mapped) != key {
        return Err(FieldMappingError::Irreversible(key.to_string()));
    }
    Ok(mapped)
}

fn map_keys<F: Copy + Fn(&str) -> Result<String>>(value: &Value, f: F) -> Result<Value> {
    match value {
        Value::Object(obj) => {
            let mut mapped = Map::with_capacity(obj.len());
            for (key, nested) in obj {
                mapped.insert(f(key)?, map_keys(nested, f)?);
            }
            Ok(Value::Object(mapped))
        }
        Value::Array(elements) => Ok(Value::Array(
            elements
                .iter()
                .map(|element| map_keys(element, f))
                .collect::<Result<_>>()?,
        )),
        scalar => Ok(scalar.clone()),
    }
}

/// Rewrite every key of a nested structure to its external name.
pub fn to_external(value: &Value) -> Result<Value> {
    map_keys(value, external_key)
}

/// Rewrite every key of a nested structure to its internal name.
///
/// Inverse of [`to_external`]: `to_internal(to_external(x)) == x` for any
/// tree whose keys are well-formed snake_case.
pub fn to_internal(value: &Value) -> Result<Value> {
    map_keys(value, internal_key)
}
