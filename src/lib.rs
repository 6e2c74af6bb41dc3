// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Schemapack
//!
//! Compact, schema-driven binary encoding for flat records.
//!
//! A schema is an ordered list of `{name, type}` fields. Each field gets a
//! stable index (its position), and every encoded field carries a one-byte
//! header packing that index with a presence state (present, null or
//! undefined). Fields missing from a record cost nothing on the wire, and
//! encoded fields may appear in any order.
//!
//! ## Architecture
//!
//! - `core/` - error type and the record value model
//! - `encoding/` - header byte, type codecs, type registry, record engine
//!   and the JSON bridge
//! - `schema/` - field specs, schema compilation and document loading
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use schemapack::{FieldSpec, Record, Schema, Slot};
//!
//! let schema = Schema::new(&[
//!     FieldSpec::new("symbol", "string"),
//!     FieldSpec::new("price", "double"),
//!     FieldSpec::new("volume", "uint32"),
//! ])?;
//!
//! let record = Record::new()
//!     .with("symbol", "ACME")
//!     .with("price", 12.5)
//!     .with("volume", Slot::Null);
//!
//! let bytes = schema.encode(&record)?;
//! assert_eq!(bytes.len(), schema.encoded_len(&record)?);
//! assert_eq!(schema.decode(&bytes)?, record);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use core::{CodecError, FieldValue, Record, Result, Slot};

// Wire encoding/decoding
pub mod encoding;

pub use encoding::{builtin_registry, decode, encode, encoded_len, TypeCodec, TypeRegistry};

// Schema compilation and loading
pub mod schema;

pub use schema::{load_schema, FieldSpec, Schema, SchemaFormat};
