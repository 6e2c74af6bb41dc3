// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema document parsing.
//!
//! A schema document lists fields in order. JSON documents may be a bare
//! array or an object with a `fields` array:
//!
//! ```json
//! [{"name": "symbol", "type": "string"}, {"name": "price", "type": "double"}]
//! ```
//!
//! TOML documents use an array of tables:
//!
//! ```toml
//! [[fields]]
//! name = "symbol"
//! type = "string"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::ast::FieldSpec;
use super::SchemaFormat;
use crate::core::{CodecError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    List(Vec<FieldSpec>),
    Table { fields: Vec<FieldSpec> },
}

#[derive(Deserialize)]
struct TomlDocument {
    #[serde(default)]
    fields: Vec<FieldSpec>,
}

/// Parse a schema document in the given format.
pub fn parse_field_specs(definition: &str, format: SchemaFormat) -> Result<Vec<FieldSpec>> {
    match format {
        SchemaFormat::Json => serde_json::from_str::<JsonDocument>(definition)
            .map(|doc| match doc {
                JsonDocument::List(fields) | JsonDocument::Table { fields } => fields,
            })
            .map_err(|e| CodecError::parse("JSON schema", e.to_string())),
        SchemaFormat::Toml => toml::from_str::<TomlDocument>(definition)
            .map(|doc| doc.fields)
            .map_err(|e| CodecError::parse("TOML schema", e.to_string())),
    }
}

/// Read and parse a schema document.
///
/// The format is taken from `format` when given, otherwise from the file
/// extension (`.toml` is TOML, anything else is JSON).
pub fn load_field_specs(path: impl AsRef<Path>, format: Option<SchemaFormat>) -> Result<Vec<FieldSpec>> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| SchemaFormat::from_path(path));
    let definition = std::fs::read_to_string(path)?;
    parse_field_specs(&definition, format)
}
