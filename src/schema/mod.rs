// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema definition and compilation.
//!
//! This module provides:
//! - [`FieldSpec`] - a `{name, type}` field list entry
//! - [`Schema`] - the compiled, immutable lookup structure
//! - Schema document loading from JSON and TOML

pub mod ast;
pub mod compiler;
pub mod parser;

use std::path::Path;

pub use ast::{FieldDefinition, FieldSpec};
pub use compiler::Schema;
pub use parser::{load_field_specs, parse_field_specs};

use crate::core::Result;

/// Schema document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl SchemaFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(SchemaFormat::Json),
            "toml" => Some(SchemaFormat::Toml),
            _ => None,
        }
    }

    /// Infer from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(SchemaFormat::Json)
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFormat::Json => "json",
            SchemaFormat::Toml => "toml",
        }
    }
}

/// Load a schema document and compile it against the built-in registry.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema> {
    let fields = load_field_specs(path, None)?;
    Schema::new(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_format_parse() {
        assert_eq!(SchemaFormat::parse("json"), Some(SchemaFormat::Json));
        assert_eq!(SchemaFormat::parse("TOML"), Some(SchemaFormat::Toml));
        assert_eq!(SchemaFormat::parse("Toml"), Some(SchemaFormat::Toml));
        assert_eq!(SchemaFormat::parse("yaml"), None);
        assert_eq!(SchemaFormat::parse(""), None);
    }

    #[test]
    fn test_schema_format_from_path() {
        assert_eq!(
            SchemaFormat::from_path(Path::new("a/b.toml")),
            SchemaFormat::Toml
        );
        assert_eq!(
            SchemaFormat::from_path(Path::new("a/b.json")),
            SchemaFormat::Json
        );
        assert_eq!(SchemaFormat::from_path(Path::new("schema")), SchemaFormat::Json);
    }

    #[test]
    fn test_schema_format_as_str() {
        assert_eq!(SchemaFormat::Json.as_str(), "json");
        assert_eq!(SchemaFormat::Toml.as_str(), "toml");
    }
}
