// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode command - bytes to JSON record.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use crate::common::{open_schema, parse_hex, read_input, Result};
use schemapack::encoding::record_to_json;

/// Decode an encoded record.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Schema document (JSON or TOML)
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,

    /// Encoded record as hex (hex is read from stdin if neither this nor --input is given)
    #[arg(value_name = "HEX", conflicts_with = "input")]
    hex: Option<String>,

    /// File holding the raw encoded bytes
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

impl DecodeCmd {
    pub fn run(self) -> Result<()> {
        let schema = open_schema(&self.schema)?;

        let bytes = match (&self.hex, &self.input) {
            (Some(text), _) => parse_hex(text)?,
            (None, Some(path)) => read_input(Some(path))?,
            (None, None) => {
                let input = read_input(None)?;
                parse_hex(std::str::from_utf8(&input).context("Hex input is not valid UTF-8")?)?
            }
        };

        let record = schema.decode(&bytes)?;
        println!("{}", serde_json::to_string_pretty(&record_to_json(&record))?);
        Ok(())
    }
}
