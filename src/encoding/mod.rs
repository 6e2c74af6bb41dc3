// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire encoding and decoding.
//!
//! This module provides:
//! - [`header`] - the one-byte unit header (presence state + field index)
//! - [`types`] - per-type value codecs
//! - [`registry`] - type name to codec lookup
//! - [`record`] - whole-record encode/decode
//! - [`json`] - schema-directed JSON conversion for records

pub mod header;
pub mod json;
pub mod record;
pub mod registry;
pub mod types;

pub use header::{HeaderByte, PresenceState, HEADER_SIZE, MAX_FIELDS, MAX_FIELD_INDEX};
pub use json::{record_from_json, record_from_json_str, record_to_json};
pub use record::{decode, encode, encoded_len, EncodeOp, EncodePlan};
pub use registry::{builtin_registry, TypeRegistry, TypeRegistryBuilder};
pub use types::{
    BooleanCodec, DateCodec, DoubleCodec, FloatCodec, IntegerCodec, StringCodec, TypeCodec,
    MAX_STRING_BYTES,
};
