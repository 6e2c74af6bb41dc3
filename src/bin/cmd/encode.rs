// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - JSON record to bytes.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use crate::common::{open_schema, read_input, Result};
use schemapack::encoding::record_from_json_str;

/// Encode a JSON record.
#[derive(Args, Clone, Debug)]
pub struct EncodeCmd {
    /// Schema document (JSON or TOML)
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,

    /// JSON record file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write raw bytes here instead of printing hex
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let schema = open_schema(&self.schema)?;
        let input = read_input(self.input.as_deref())?;
        let text = std::str::from_utf8(&input).context("Record input is not valid UTF-8")?;

        let record = record_from_json_str(&schema, text)?;
        let bytes = schema.encode(&record)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote {} bytes to {}", bytes.len(), path.display());
            }
            None => println!("{}", hex::encode(&bytes)),
        }
        Ok(())
    }
}
