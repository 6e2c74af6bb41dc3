// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field specifications and compiled field definitions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::encoding::TypeCodec;

/// One entry of a schema's field list, as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,
    /// Registered type name (e.g. "uint8", "string")
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FieldSpec {
    /// Create a field spec.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A compiled field: name, stable index and resolved codec.
#[derive(Clone)]
pub struct FieldDefinition {
    name: String,
    index: usize,
    codec: Arc<dyn TypeCodec>,
}

impl FieldDefinition {
    pub(crate) fn new(name: String, index: usize, codec: Arc<dyn TypeCodec>) -> Self {
        Self { name, index, codec }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the field in the original field list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Codec for this field's values.
    pub fn codec(&self) -> &dyn TypeCodec {
        self.codec.as_ref()
    }

    /// Registered type name of the codec.
    pub fn type_name(&self) -> &str {
        self.codec.name()
    }

    /// Rebuild the spec this definition was compiled from.
    pub fn to_spec(&self) -> FieldSpec {
        FieldSpec::new(self.name.clone(), self.type_name())
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("type", &self.type_name())
            .finish()
    }
}
