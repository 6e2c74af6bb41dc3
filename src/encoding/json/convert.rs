// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema-directed conversion between JSON and records.
//!
//! JSON has no undefined, so an explicit undefined is written as the object
//! `{"$undefined": true}`. `null` maps to an explicit null and a missing key
//! to an absent field. Dates are RFC 3339 strings (integer milliseconds are
//! accepted on input).
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use schemapack::encoding::json::{record_from_json_str, record_to_json};
//! use schemapack::schema::{FieldSpec, Schema};
//!
//! let schema = Schema::new(&[FieldSpec::new("a", "uint8"), FieldSpec::new("b", "string")])?;
//! let record = record_from_json_str(&schema, r#"{"b": "hi", "a": 7}"#)?;
//! assert_eq!(record.names().collect::<Vec<_>>(), vec!["b", "a"]);
//! assert_eq!(record_to_json(&record)["a"], 7);
//! # Ok(())
//! # }
//! ```

use chrono::SecondsFormat;
use serde_json::{Map, Number, Value};

use crate::core::{CodecError, FieldValue, Record, Result, Slot};
use crate::schema::{FieldDefinition, Schema};

/// Key of the object standing in for an explicit undefined.
pub const UNDEFINED_MARKER: &str = "$undefined";

/// Parse a JSON document and convert it with [`record_from_json`].
pub fn record_from_json_str(schema: &Schema, json: &str) -> Result<Record> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| CodecError::parse("JSON record", e.to_string()))?;
    record_from_json(schema, &value)
}

/// Convert a JSON object into a record, keeping the object's key order.
///
/// # Errors
///
/// - [`CodecError::InvalidRecord`] if `value` is not an object
/// - [`CodecError::UnknownField`] for keys the schema lacks
/// - [`CodecError::TypeMismatch`] for values that cannot become the field's type
/// - [`CodecError::ValueOutOfRange`] for values of the right kind the field's
///   codec cannot represent
pub fn record_from_json(schema: &Schema, value: &Value) -> Result<Record> {
    let object = value.as_object().ok_or_else(|| {
        CodecError::invalid_record(format!("expected a JSON object, found {}", json_kind(value)))
    })?;

    let mut record = Record::with_capacity(object.len());
    for (name, json) in object {
        let field = schema
            .field(name)
            .ok_or_else(|| CodecError::unknown_field(name))?;
        record.insert(name.clone(), slot_from_json(field, json)?);
    }
    Ok(record)
}

/// Convert a record into a JSON object, keeping the record's entry order.
pub fn record_to_json(record: &Record) -> Value {
    let mut object = Map::with_capacity(record.len());
    for (name, slot) in record.iter() {
        object.insert(name.to_string(), slot_to_json(slot));
    }
    Value::Object(object)
}

fn slot_from_json(field: &FieldDefinition, json: &Value) -> Result<Slot> {
    if json.is_null() {
        return Ok(Slot::Null);
    }
    if is_undefined_marker(json) {
        return Ok(Slot::Undefined);
    }

    field
        .codec()
        .value_from_json(json)?
        .map(Slot::Value)
        .ok_or_else(|| CodecError::type_mismatch(field.name(), field.type_name(), json_kind(json)))
}

/// Take a JSON boolean, string or number as the matching [`FieldValue`].
///
/// Non-negative integers become `UInt`, negative ones `Int` and everything
/// else `Double`. Arrays and objects have no face value.
pub fn face_value(json: &Value) -> Option<FieldValue> {
    match json {
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::String(s) => Some(FieldValue::String(s.clone())),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Some(FieldValue::UInt(v))
            } else if let Some(v) = n.as_i64() {
                Some(FieldValue::Int(v))
            } else {
                n.as_f64().map(FieldValue::Double)
            }
        }
        _ => None,
    }
}

fn is_undefined_marker(json: &Value) -> bool {
    json.as_object().is_some_and(|object| {
        object.len() == 1 && object.get(UNDEFINED_MARKER) == Some(&Value::Bool(true))
    })
}

fn slot_to_json(slot: &Slot) -> Value {
    match slot {
        Slot::Value(value) => value_to_json(value),
        Slot::Null => Value::Null,
        Slot::Undefined => {
            let mut marker = Map::new();
            marker.insert(UNDEFINED_MARKER.to_string(), Value::Bool(true));
            Value::Object(marker)
        }
    }
}

fn value_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Int(v) => Value::from(*v),
        FieldValue::UInt(v) => Value::from(*v),
        FieldValue::Float(v) => Number::from_f64(f64::from(*v))
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldValue::Double(v) => Number::from_f64(*v)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldValue::String(s) => Value::String(s.clone()),
        FieldValue::Date(d) => Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
