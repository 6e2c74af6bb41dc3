// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record value model.
//!
//! A [`Record`] maps field names to a [`Slot`], which distinguishes a real
//! [`FieldValue`] from an explicit null and an explicit undefined. A name that
//! is missing from the record entirely is "absent" and never reaches the wire.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scalar value carried by a present field.
///
/// Decoding always yields the canonical variant of the field's codec:
/// signed integer codecs produce [`FieldValue::Int`], unsigned ones
/// [`FieldValue::UInt`], `float` produces [`FieldValue::Float`] and `double`
/// produces [`FieldValue::Double`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    // Boolean
    Bool(bool),

    // Integers, narrowed to the codec width on encode
    Int(i64),
    UInt(u64),

    // Floating point
    Float(f32),
    Double(f64),

    // String (UTF-8)
    String(String),

    // Millisecond-precision instant
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// Get the kind of this value as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "boolean",
            FieldValue::Int(_) => "signed integer",
            FieldValue::UInt(_) => "unsigned integer",
            FieldValue::Float(_) => "float",
            FieldValue::Double(_) => "double",
            FieldValue::String(_) => "string",
            FieldValue::Date(_) => "date",
        }
    }

    /// Try to view this value as an i64 (integers only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to view this value as a u64 (non-negative integers only).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(v) => Some(*v),
            FieldValue::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to view this value as an f64 (floating point only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(f64::from(*v)),
            FieldValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner date.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Double(v) => write!(f, "{v}"),
            FieldValue::String(s) => write!(f, "\"{s}\""),
            FieldValue::Date(d) => write!(f, "{}", d.to_rfc3339()),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Date(v)
    }
}

/// Contents of a record entry: a value, or one of the two explicit absences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    /// Field carries a value
    Value(FieldValue),
    /// Field is explicitly null
    Null,
    /// Field is explicitly undefined
    Undefined,
}

impl Slot {
    /// Check if this slot carries a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Slot::Value(_))
    }

    /// Get the carried value, if any.
    pub fn value(&self) -> Option<&FieldValue> {
        match self {
            Slot::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<FieldValue> for Slot {
    fn from(v: FieldValue) -> Self {
        Slot::Value(v)
    }
}

macro_rules! impl_slot_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Slot {
            fn from(v: $t) -> Self {
                Slot::Value(FieldValue::from(v))
            }
        })*
    };
}

impl_slot_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, &str, String, DateTime<Utc>);

/// Insertion-ordered mapping from field name to [`Slot`].
///
/// The entry order is the wire order used by the encoder. Equality ignores
/// order: two records are equal when they hold the same names with equal
/// slots.
///
/// Entries live in a plain `Vec` and lookups scan it linearly. A record
/// that goes through a schema has at most 64 entries (one per header
/// index), so building one by repeated `insert` stays cheap and keeps the
/// entry order without a second index.
#[derive(Debug, Clone, Default)]
pub struct Record {
    entries: Vec<(String, Slot)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set `name` to `slot`.
    ///
    /// An existing entry keeps its position; the previous slot is returned.
    pub fn insert(&mut self, name: impl Into<String>, slot: impl Into<Slot>) -> Option<Slot> {
        let name = name.into();
        let slot = slot.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, slot)),
            None => {
                self.entries.push((name, slot));
                None
            }
        }
    }

    /// Set `name` to an explicit null.
    pub fn insert_null(&mut self, name: impl Into<String>) -> Option<Slot> {
        self.insert(name, Slot::Null)
    }

    /// Set `name` to an explicit undefined.
    pub fn insert_undefined(&mut self, name: impl Into<String>) -> Option<Slot> {
        self.insert(name, Slot::Undefined)
    }

    /// Builder-style variant of [`Record::insert`].
    pub fn with(mut self, name: impl Into<String>, slot: impl Into<Slot>) -> Self {
        self.insert(name, slot);
        self
    }

    /// Look up the slot for `name`.
    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, slot)| slot)
    }

    /// Look up the value for `name`, if the field is present with a value.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).and_then(Slot::value)
    }

    /// Check whether `name` has an entry (value, null or undefined).
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove the entry for `name`, making the field absent.
    pub fn remove(&mut self, name: &str) -> Option<Slot> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Iterate names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, slot)| other.get(name) == Some(slot))
    }
}

impl<K: Into<String>, S: Into<Slot>> FromIterator<(K, S)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, slot) in iter {
            record.insert(name, slot);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, slot) in self.iter() {
            map.serialize_entry(name, slot)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to slots")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, slot)) = access.next_entry::<String, Slot>()? {
                    record.insert(name, slot);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
