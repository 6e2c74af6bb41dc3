// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema command - inspect and validate schema documents.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

use crate::common::{open_schema, output_json_or, Result};

/// Schema operations.
#[derive(Subcommand, Clone, Debug)]
pub enum SchemaCmd {
    /// Show fields with their wire indices
    Show {
        /// Schema document (JSON or TOML)
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Check that a schema document compiles
    Validate {
        /// Schema document (JSON or TOML)
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
    },
}

impl SchemaCmd {
    pub fn run(self) -> Result<()> {
        match self {
            SchemaCmd::Show { schema, json } => cmd_show(schema, json),
            SchemaCmd::Validate { schema } => cmd_validate(schema),
        }
    }
}

fn cmd_show(path: PathBuf, json: bool) -> Result<()> {
    let schema = open_schema(&path)?;

    let fields: Vec<FieldItem> = schema
        .fields()
        .iter()
        .map(|field| FieldItem {
            index: field.index(),
            name: field.name().to_string(),
            type_name: field.type_name().to_string(),
            width: field.codec().fixed_width(),
        })
        .collect();

    output_json_or(json, &fields, || {
        println!("=== Schema {} ===", path.display());
        println!();
        for field in &fields {
            println!("  [{:>2}] {:<24} {}", field.index, field.name, field.type_name);
        }
        println!();
        println!("{} fields", fields.len());
        Ok(())
    })
}

fn cmd_validate(path: PathBuf) -> Result<()> {
    let schema = open_schema(&path)?;
    println!("✓ {}: {} fields", path.display(), schema.len());
    Ok(())
}

// Output types

#[derive(Serialize)]
struct FieldItem {
    index: usize,
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    width: Option<usize>,
}
