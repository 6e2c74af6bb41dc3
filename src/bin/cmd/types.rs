// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Types command - list registered field types.

use clap::Args;
use serde::Serialize;

use crate::common::{output_json_or, Result};
use schemapack::builtin_registry;

/// List registered field types.
#[derive(Args, Clone, Debug)]
pub struct TypesCmd {
    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct TypeItem {
    name: String,
    /// Bytes per value, absent for variable-width types
    width: Option<usize>,
}

impl TypesCmd {
    pub fn run(self) -> Result<()> {
        let registry = builtin_registry();
        let items: Vec<TypeItem> = registry
            .names()
            .into_iter()
            .filter_map(|name| {
                registry.get(name).map(|codec| TypeItem {
                    name: name.to_string(),
                    width: codec.fixed_width(),
                })
            })
            .collect();

        output_json_or(self.json, &items, || {
            for item in &items {
                match item.width {
                    Some(width) => println!("{:<10} {} bytes", item.name, width),
                    None => println!("{:<10} variable", item.name),
                }
            }
            Ok(())
        })
    }
}
