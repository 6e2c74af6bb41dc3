// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-width integer and floating point codecs.

use byteorder::{BigEndian, ByteOrder};
use serde_json::Value;

use super::{region, region_mut, TypeCodec};
use crate::core::{CodecError, FieldValue, Result};

/// Codec for fixed-width signed and unsigned integers up to 48 bits.
///
/// Either integer kind is accepted on encode as long as the numeric value
/// fits the width; decode yields [`FieldValue::Int`] for signed codecs and
/// [`FieldValue::UInt`] for unsigned ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerCodec {
    name: &'static str,
    width: usize,
    signed: bool,
}

impl IntegerCodec {
    /// `int8`
    pub const INT8: Self = Self::signed("int8", 1);
    /// `int16`
    pub const INT16: Self = Self::signed("int16", 2);
    /// `int32`
    pub const INT32: Self = Self::signed("int32", 4);
    /// `int48`
    pub const INT48: Self = Self::signed("int48", 6);
    /// `uint8`
    pub const UINT8: Self = Self::unsigned("uint8", 1);
    /// `uint16`
    pub const UINT16: Self = Self::unsigned("uint16", 2);
    /// `uint32`
    pub const UINT32: Self = Self::unsigned("uint32", 4);
    /// `uint48`
    pub const UINT48: Self = Self::unsigned("uint48", 6);

    const fn signed(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            signed: true,
        }
    }

    const fn unsigned(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            signed: false,
        }
    }

    /// Whether this codec stores two's-complement values.
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Smallest representable value.
    pub const fn min(&self) -> i64 {
        if self.signed {
            -(1i64 << (self.width * 8 - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub const fn max(&self) -> i64 {
        if self.signed {
            (1i64 << (self.width * 8 - 1)) - 1
        } else {
            (1i64 << (self.width * 8)) - 1
        }
    }

    fn value(&self, value: &FieldValue) -> Result<i64> {
        let n = match value {
            FieldValue::Int(v) => i128::from(*v),
            FieldValue::UInt(v) => i128::from(*v),
            other => return Err(CodecError::type_mismatch(self.name, self.name, other.kind())),
        };
        if n < i128::from(self.min()) || n > i128::from(self.max()) {
            return Err(CodecError::out_of_range(self.name, n));
        }
        // Range checked above; every width here fits in an i64.
        Ok(n as i64)
    }
}

impl TypeCodec for IntegerCodec {
    fn name(&self) -> &str {
        self.name
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        self.value(value)?;
        Ok(self.width)
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let n = self.value(value)?;
        let dst = region_mut(buffer, offset, self.width)?;
        if self.signed {
            BigEndian::write_int(dst, n, self.width);
        } else {
            BigEndian::write_uint(dst, n as u64, self.width);
        }
        Ok(offset + self.width)
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        let src = region(buffer, offset, self.width)?;
        Ok(if self.signed {
            FieldValue::Int(BigEndian::read_int(src, self.width))
        } else {
            FieldValue::UInt(BigEndian::read_uint(src, self.width))
        })
    }

    fn fixed_width(&self) -> Option<usize> {
        Some(self.width)
    }

    /// JSON integers keep their sign so the range check reports the
    /// original value; fractional numbers do not fit.
    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        let Some(n) = json.as_number() else {
            return Ok(None);
        };
        Ok(match (n.as_i64(), n.as_u64()) {
            (Some(v), _) if self.signed || v < 0 => Some(FieldValue::Int(v)),
            (_, Some(v)) => Some(FieldValue::UInt(v)),
            (Some(v), None) => Some(FieldValue::Int(v)),
            (None, None) => None,
        })
    }
}

/// Codec for `float` (IEEE-754 binary32) fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCodec;

impl FloatCodec {
    const NAME: &'static str = "float";
    const WIDTH: usize = 4;

    fn value(value: &FieldValue) -> Result<f32> {
        match value {
            FieldValue::Float(v) => Ok(*v),
            other => Err(CodecError::type_mismatch(Self::NAME, Self::NAME, other.kind())),
        }
    }
}

impl TypeCodec for FloatCodec {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        Self::value(value)?;
        Ok(Self::WIDTH)
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let v = Self::value(value)?;
        BigEndian::write_f32(region_mut(buffer, offset, Self::WIDTH)?, v);
        Ok(offset + Self::WIDTH)
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        let src = region(buffer, offset, Self::WIDTH)?;
        Ok(FieldValue::Float(BigEndian::read_f32(src)))
    }

    fn fixed_width(&self) -> Option<usize> {
        Some(Self::WIDTH)
    }

    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        let Some(v) = json.as_f64() else {
            return Ok(None);
        };
        let narrowed = v as f32;
        if v.is_finite() && !narrowed.is_finite() {
            return Err(CodecError::out_of_range(Self::NAME, v));
        }
        Ok(Some(FieldValue::Float(narrowed)))
    }
}

/// Codec for `double` (IEEE-754 binary64) fields.
///
/// Single-precision values are widened on encode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleCodec;

impl DoubleCodec {
    const NAME: &'static str = "double";
    const WIDTH: usize = 8;

    fn value(value: &FieldValue) -> Result<f64> {
        value
            .as_f64()
            .ok_or_else(|| CodecError::type_mismatch(Self::NAME, Self::NAME, value.kind()))
    }
}

impl TypeCodec for DoubleCodec {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        Self::value(value)?;
        Ok(Self::WIDTH)
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let v = Self::value(value)?;
        BigEndian::write_f64(region_mut(buffer, offset, Self::WIDTH)?, v);
        Ok(offset + Self::WIDTH)
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        let src = region(buffer, offset, Self::WIDTH)?;
        Ok(FieldValue::Double(BigEndian::read_f64(src)))
    }

    fn fixed_width(&self) -> Option<usize> {
        Some(Self::WIDTH)
    }

    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        Ok(json.as_f64().map(FieldValue::Double))
    }
}
