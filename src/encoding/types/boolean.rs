// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `boolean` codec: one byte, `0x00` or `0x01`.

use serde_json::Value;

use super::{region, region_mut, TypeCodec};
use crate::core::{CodecError, FieldValue, Result};

/// Codec for `boolean` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

impl BooleanCodec {
    const NAME: &'static str = "boolean";

    fn value(value: &FieldValue) -> Result<bool> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::type_mismatch(Self::NAME, Self::NAME, value.kind()))
    }
}

impl TypeCodec for BooleanCodec {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        Self::value(value)?;
        Ok(1)
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let flag = Self::value(value)?;
        region_mut(buffer, offset, 1)?[0] = u8::from(flag);
        Ok(offset + 1)
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        match region(buffer, offset, 1)?[0] {
            0 => Ok(FieldValue::Bool(false)),
            1 => Ok(FieldValue::Bool(true)),
            other => Err(CodecError::corrupt(
                offset,
                format!("invalid boolean byte {other:#04x}"),
            )),
        }
    }

    fn fixed_width(&self) -> Option<usize> {
        Some(1)
    }

    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        Ok(json.as_bool().map(FieldValue::Bool))
    }
}
