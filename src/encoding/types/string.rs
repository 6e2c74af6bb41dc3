// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `string` codec: u16 big-endian byte length followed by UTF-8 bytes.

use byteorder::{BigEndian, ByteOrder};
use serde_json::Value;

use super::{region, region_mut, TypeCodec};
use crate::core::{CodecError, FieldValue, Result};

/// Size of the length prefix.
const LENGTH_PREFIX: usize = 2;

/// Longest string (in UTF-8 bytes) the prefix can describe.
pub const MAX_STRING_BYTES: usize = u16::MAX as usize;

/// Codec for `string` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl StringCodec {
    const NAME: &'static str = "string";

    fn value(value: &FieldValue) -> Result<&str> {
        let s = value
            .as_str()
            .ok_or_else(|| CodecError::type_mismatch(Self::NAME, Self::NAME, value.kind()))?;
        if s.len() > MAX_STRING_BYTES {
            return Err(CodecError::out_of_range(
                Self::NAME,
                format!("<{} bytes>", s.len()),
            ));
        }
        Ok(s)
    }
}

impl TypeCodec for StringCodec {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        Ok(LENGTH_PREFIX + Self::value(value)?.len())
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let s = Self::value(value)?;
        let dst = region_mut(buffer, offset, LENGTH_PREFIX + s.len())?;
        BigEndian::write_u16(&mut dst[..LENGTH_PREFIX], s.len() as u16);
        dst[LENGTH_PREFIX..].copy_from_slice(s.as_bytes());
        Ok(offset + LENGTH_PREFIX + s.len())
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        let len = BigEndian::read_u16(region(buffer, offset, LENGTH_PREFIX)?) as usize;
        let bytes = region(buffer, offset + LENGTH_PREFIX, len)?;
        let s = std::str::from_utf8(bytes)
            .map_err(|e| CodecError::corrupt(offset, format!("invalid UTF-8 in string: {e}")))?;
        Ok(FieldValue::String(s.to_string()))
    }

    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        Ok(json.as_str().map(FieldValue::from))
    }
}
