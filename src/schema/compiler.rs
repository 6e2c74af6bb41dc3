// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema compilation.
//!
//! Turns an ordered list of [`FieldSpec`]s into an immutable [`Schema`] with
//! both name and index lookups. A field's index is its position in the list
//! and is what header bytes carry on the wire.

use std::collections::HashMap;

use tracing::debug;

use super::ast::{FieldDefinition, FieldSpec};
use crate::core::{CodecError, Record, Result};
use crate::encoding::header::MAX_FIELDS;
use crate::encoding::record;
use crate::encoding::{builtin_registry, TypeRegistry};

/// Compiled, read-only schema.
///
/// `fields()[i].index() == i` for every field, and name lookups resolve to
/// the same definitions as index lookups.
#[derive(Debug, Clone)]
pub struct Schema {
    by_name: HashMap<String, usize>,
    sequence: Vec<FieldDefinition>,
}

impl Schema {
    /// Compile `fields` against the built-in type registry.
    pub fn new(fields: &[FieldSpec]) -> Result<Self> {
        Self::compile(fields, builtin_registry())
    }

    /// Compile `fields`, resolving type names through `registry`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::TooManyFields`] if more than [`MAX_FIELDS`] are given
    /// - [`CodecError::DuplicateField`] if two entries share a name
    /// - [`CodecError::UnknownType`] if a type name is not registered
    pub fn compile(fields: &[FieldSpec], registry: &TypeRegistry) -> Result<Self> {
        if fields.len() > MAX_FIELDS {
            return Err(CodecError::TooManyFields {
                count: fields.len(),
                max: MAX_FIELDS,
            });
        }

        let mut by_name = HashMap::with_capacity(fields.len());
        let mut sequence = Vec::with_capacity(fields.len());

        for (index, spec) in fields.iter().enumerate() {
            if by_name.contains_key(&spec.name) {
                return Err(CodecError::duplicate_field(&spec.name));
            }
            let codec = registry
                .get(&spec.type_name)
                .ok_or_else(|| CodecError::unknown_type(&spec.name, &spec.type_name))?;

            by_name.insert(spec.name.clone(), index);
            sequence.push(FieldDefinition::new(spec.name.clone(), index, codec.clone()));
        }

        debug!(fields = sequence.len(), "compiled schema");

        Ok(Self { by_name, sequence })
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.by_name.get(name).map(|&index| &self.sequence[index])
    }

    /// Look up a field by its stable index.
    pub fn field_at(&self, index: usize) -> Option<&FieldDefinition> {
        self.sequence.get(index)
    }

    /// All fields in index order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.sequence
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Field list this schema was compiled from.
    pub fn to_specs(&self) -> Vec<FieldSpec> {
        self.sequence.iter().map(FieldDefinition::to_spec).collect()
    }

    /// Encode `record` with this schema. See [`record::encode`].
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        record::encode(self, record)
    }

    /// Decode `buffer` with this schema. See [`record::decode`].
    pub fn decode(&self, buffer: &[u8]) -> Result<Record> {
        record::decode(self, buffer)
    }

    /// Size in bytes `record` would encode to.
    pub fn encoded_len(&self, record: &Record) -> Result<usize> {
        record::encoded_len(self, record)
    }
}
