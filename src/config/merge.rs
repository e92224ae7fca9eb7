//! Merge rules: schema-driven overlay of a user document onto the default
//! document, plus staleness detection between the two.
//!
//! The default document is the schema authority. The merged result always has
//! exactly the default's key set at every nesting level: user keys unknown to
//! the default are dropped, user values of a different runtime kind than the
//! default fall back to the default value.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Serializer, Value};

/// Runtime kind of a JSON value for the shallow merge type check.
///
/// Integers and floats are distinct kinds, mirroring a strict type-tag
/// comparison. Arrays and objects compare by container kind only; element
/// types are not inspected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

fn kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(n) => {
            if n.is_f64() {
                ValueKind::Float
            } else {
                ValueKind::Integer
            }
        }
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Recursively merge a user document into the default document's shape.
///
/// For every default key: nested objects recurse, same-kind user values win,
/// kind mismatches and missing keys fall back to the default value.
pub(crate) fn merge_documents(
    default: &Map<String, Value>,
    user: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = Map::new();
    for (key, default_value) in default {
        let value = match user.get(key) {
            Some(user_value) => {
                match (default_value, user_value) {
                    (Value::Object(default_inner), Value::Object(user_inner)) => {
                        Value::Object(merge_documents(default_inner, user_inner))
                    }
                    _ if kind(default_value) == kind(user_value) => user_value.clone(),
                    // kind mismatch: the default value wins
                    _ => default_value.clone(),
                }
            }
            None => default_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

/// Whether the merged document differs from the user document, i.e. the user
/// file on disk is stale and a migration is available.
pub(crate) fn update_available(merged: &Map<String, Value>, user: &Map<String, Value>) -> bool {
    if merged.len() != user.len() || merged.keys().any(|key| !user.contains_key(key)) {
        return true;
    }
    for (key, merged_value) in merged {
        let user_value = &user[key];
        match (merged_value, user_value) {
            (Value::Object(merged_inner), Value::Object(user_inner)) => {
                if update_available(merged_inner, user_inner) {
                    return true;
                }
            }
            _ => {
                if !values_equal(merged_value, user_value) {
                    return true;
                }
            }
        }
    }
    false
}

/// Deep value equality with numeric comparison, so `5` equals `5.0`.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(xv, yv)| values_equal(xv, yv))
        }
        (Value::Object(x), Value::Object(y)) => !update_available(x, y),
        _ => a == b,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Serialize a document with 2-space indentation, the format user config
/// files are migrated with.
pub(crate) fn to_pretty_json(document: &Map<String, Value>) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8(out).expect("serialized JSON is valid UTF-8"))
}
