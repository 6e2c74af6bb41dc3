// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `date` codec: signed 48-bit milliseconds since the Unix epoch.
//!
//! Sub-millisecond precision is dropped on encode.

use byteorder::{BigEndian, ByteOrder};
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{region, region_mut, TypeCodec};
use crate::core::{CodecError, FieldValue, Result};

const WIDTH: usize = 6;

const MAX_MILLIS: i64 = (1i64 << 47) - 1;
const MIN_MILLIS: i64 = -(1i64 << 47);

/// Codec for `date` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateCodec;

impl DateCodec {
    const NAME: &'static str = "date";

    fn millis(value: &FieldValue) -> Result<i64> {
        let date = value
            .as_date()
            .ok_or_else(|| CodecError::type_mismatch(Self::NAME, Self::NAME, value.kind()))?;
        let millis = date.timestamp_millis();
        if !(MIN_MILLIS..=MAX_MILLIS).contains(&millis) {
            return Err(CodecError::out_of_range(Self::NAME, date.to_rfc3339()));
        }
        Ok(millis)
    }
}

impl TypeCodec for DateCodec {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        Self::millis(value)?;
        Ok(WIDTH)
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let millis = Self::millis(value)?;
        BigEndian::write_int(region_mut(buffer, offset, WIDTH)?, millis, WIDTH);
        Ok(offset + WIDTH)
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        let millis = BigEndian::read_int(region(buffer, offset, WIDTH)?, WIDTH);
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(FieldValue::Date)
            .ok_or_else(|| CodecError::corrupt(offset, format!("date out of range: {millis} ms")))
    }

    fn fixed_width(&self) -> Option<usize> {
        Some(WIDTH)
    }

    /// RFC 3339 strings or integer milliseconds since the epoch.
    fn value_from_json(&self, json: &Value) -> Result<Option<FieldValue>> {
        let date = match json {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
            Value::Number(n) => match n.as_i64() {
                Some(millis) => Some(
                    DateTime::<Utc>::from_timestamp_millis(millis)
                        .ok_or_else(|| CodecError::out_of_range(Self::NAME, millis))?,
                ),
                None => None,
            },
            _ => None,
        };
        Ok(date.map(FieldValue::Date))
    }
}
