// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON bridge for records.
//!
//! Converts JSON objects to [`Record`](crate::core::Record)s guided by a
//! schema, and records back to JSON.

pub mod convert;

pub use convert::{
    face_value, record_from_json, record_from_json_str, record_to_json, UNDEFINED_MARKER,
};
