// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout schemapack.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy for compile, encode and decode
//! - [`FieldValue`] - Scalar values carried by present fields
//! - [`Slot`] - Value, explicit null or explicit undefined
//! - [`Record`] - Ordered field name to slot mapping

pub mod error;
pub mod value;

pub use error::{CodecError, Result};
pub use value::{FieldValue, Record, Slot};
