// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Schemapack CLI
//!
//! Command-line front end for schema-driven record encoding.
//!
//! ## Usage
//!
//! ```sh
//! # List the built-in types
//! schemapack types
//!
//! # Show or validate a schema document
//! schemapack schema show trade.json
//! schemapack schema validate trade.toml
//!
//! # Encode a JSON record (stdin) to hex
//! echo '{"symbol": "ACME", "price": 12.5}' | schemapack encode trade.json
//!
//! # Decode hex back to JSON
//! schemapack decode trade.json 0100044143...
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{DecodeCmd, EncodeCmd, SchemaCmd, TypesCmd};
use common::Result;

/// Schemapack - compact schema-driven record encoding
///
/// Records are flat JSON objects; schemas are ordered `{name, type}` lists
/// in JSON or TOML.
#[derive(Parser, Clone)]
#[command(name = "schemapack")]
#[command(about = "Compact schema-driven binary encoding for flat records", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// List registered field types
    Types(TypesCmd),

    /// Schema operations (show, validate)
    #[command(subcommand)]
    Schema(SchemaCmd),

    /// Encode a JSON record
    Encode(EncodeCmd),

    /// Decode an encoded record to JSON
    Decode(DecodeCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Types(cmd) => cmd.run(),
        Commands::Schema(cmd) => cmd.run(),
        Commands::Encode(cmd) => cmd.run(),
        Commands::Decode(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
