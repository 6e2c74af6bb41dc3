// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::io::Read as _;
use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;

use schemapack::Schema;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Load and compile a schema document.
pub fn open_schema(path: &Path) -> Result<Schema> {
    schemapack::load_schema(path)
        .with_context(|| format!("Failed to load schema {}", path.display()))
}

/// Read all bytes from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut data = Vec::new();
            std::io::stdin()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
            Ok(data)
        }
    }
}

/// Parse a hex string, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits).context("Invalid hex input")
}

/// Print `value` as pretty JSON, or run the human-readable printer.
pub fn output_json_or<T>(
    json: bool,
    value: &T,
    human_fn: impl FnOnce() -> std::io::Result<()>,
) -> Result<()>
where
    T: Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human_fn()?;
    }
    Ok(())
}
