// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type codecs for individual field values.
//!
//! A [`TypeCodec`] knows how many bytes a value occupies, how to write it and
//! how to read it back. The record engine sizes a buffer with
//! [`TypeCodec::byte_length`] before calling [`TypeCodec::write`], so the two
//! must agree exactly for every value a codec accepts.
//!
//! Built-in codecs (all multi-byte values big-endian):
//! - [`BooleanCodec`] - `boolean`, one byte
//! - [`DateCodec`] - `date`, 48-bit signed milliseconds since the Unix epoch
//! - [`FloatCodec`] / [`DoubleCodec`] - `float` / `double`, IEEE-754
//! - [`IntegerCodec`] - `int8`..`int48` and `uint8`..`uint48`
//! - [`StringCodec`] - `string`, u16 length prefix plus UTF-8 bytes

mod boolean;
mod date;
mod numeric;
mod string;

pub use boolean::BooleanCodec;
pub use date::DateCodec;
pub use numeric::{DoubleCodec, FloatCodec, IntegerCodec};
pub use string::{StringCodec, MAX_STRING_BYTES};

use serde_json::Value;

use crate::core::{CodecError, FieldValue, Result};
use crate::encoding::json::convert::face_value;

/// Codec for one schema type.
///
/// Implementations are stateless and shared between threads through the
/// type registry.
pub trait TypeCodec: Send + Sync {
    /// Schema-facing type name (e.g. "uint8", "string").
    fn name(&self) -> &str;

    /// Exact number of bytes [`TypeCodec::write`] consumes for `value`.
    ///
    /// Fails when the value kind does not fit this codec or cannot be
    /// represented by it.
    fn byte_length(&self, value: &FieldValue) -> Result<usize>;

    /// Write `value` at `offset`, returning the offset just past it.
    ///
    /// The caller provides at least `byte_length(value)` bytes from `offset`.
    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize>;

    /// Read a value starting at `offset`.
    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue>;

    /// Width in bytes when every value has the same size.
    fn fixed_width(&self) -> Option<usize> {
        None
    }

    /// Convert a non-null JSON value into this codec's value kind.
    ///
    /// `Ok(None)` means the JSON kind does not fit this codec. Values of the
    /// right kind that the codec cannot represent fail with
    /// [`CodecError::ValueOutOfRange`]. The default takes JSON booleans,
    /// strings and numbers at face value.
    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        Ok(face_value(json))
    }
}

/// Borrow `len` bytes at `offset` for reading.
pub(crate) fn region(buffer: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let available = buffer.len().saturating_sub(offset);
    if len > available {
        return Err(CodecError::truncated(len, available, offset));
    }
    let start = offset.min(buffer.len());
    Ok(&buffer[start..start + len])
}

/// Borrow `len` bytes at `offset` for writing.
pub(crate) fn region_mut(buffer: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    let available = buffer.len().saturating_sub(offset);
    if len > available {
        return Err(CodecError::invariant_violation(format!(
            "write of {len} bytes at offset {offset} exceeds buffer ({available} bytes left)"
        )));
    }
    let start = offset.min(buffer.len());
    Ok(&mut buffer[start..start + len])
}
