// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record encoding and decoding.
//!
//! An encoded record is a concatenation of units, one per record entry, in
//! the record's own entry order:
//!
//! ```text
//! [header][payload?] [header][payload?] ...
//! ```
//!
//! The payload follows only when the header's presence state is
//! [`PresenceState::Present`]. Fields absent from the record produce no unit
//! at all.
//!
//! Encoding runs in two passes. The sizing pass validates every entry and
//! builds an [`EncodePlan`] holding each unit's header and payload length;
//! the write pass allocates exactly [`EncodePlan::size`] bytes and replays
//! the plan.

use tracing::{debug, warn};

use super::header::{HeaderByte, PresenceState, HEADER_SIZE};
use crate::core::{CodecError, FieldValue, Record, Result, Slot};
use crate::schema::{FieldDefinition, Schema};

/// One planned unit of an encoded record.
#[derive(Debug)]
pub struct EncodeOp<'a> {
    /// Header byte for the unit
    pub header: HeaderByte,
    /// Field the unit belongs to
    pub field: &'a FieldDefinition,
    /// Payload value, only for present fields
    pub value: Option<&'a FieldValue>,
    /// Payload length in bytes (0 without payload)
    pub payload_len: usize,
}

impl EncodeOp<'_> {
    /// Total unit length, header included.
    pub fn len(&self) -> usize {
        HEADER_SIZE + self.payload_len
    }
}

/// Validated, sized sequence of units for one record.
#[derive(Debug)]
pub struct EncodePlan<'a> {
    ops: Vec<EncodeOp<'a>>,
    size: usize,
}

impl<'a> EncodePlan<'a> {
    /// Sizing pass: resolve every record entry against `schema`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnknownField`] for a record key the schema lacks
    /// - [`CodecError::TypeMismatch`] / [`CodecError::ValueOutOfRange`] when a
    ///   value does not fit its field's codec
    pub fn build(schema: &'a Schema, record: &'a Record) -> Result<Self> {
        let mut ops = Vec::with_capacity(record.len());
        let mut size = 0;

        for (name, slot) in record.iter() {
            let field = schema
                .field(name)
                .ok_or_else(|| CodecError::unknown_field(name))?;
            let state = PresenceState::of(slot);
            let header = HeaderByte::pack(field.index(), state)?;

            let (value, payload_len) = match slot {
                Slot::Value(value) => {
                    let len = field
                        .codec()
                        .byte_length(value)
                        .map_err(|e| with_field_name(e, field))?;
                    (Some(value), len)
                }
                Slot::Null | Slot::Undefined => (None, 0),
            };

            let op = EncodeOp {
                header,
                field,
                value,
                payload_len,
            };
            size += op.len();
            ops.push(op);
        }

        Ok(Self { ops, size })
    }

    /// Exact size of the encoded record.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Planned units in wire order.
    pub fn ops(&self) -> &[EncodeOp<'a>] {
        &self.ops
    }

    /// Write pass: allocate the buffer and emit every unit.
    pub fn execute(&self) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; self.size];
        let mut offset = 0;

        for op in &self.ops {
            buffer[offset] = op.header.as_u8();
            offset += HEADER_SIZE;

            if let Some(value) = op.value {
                let end = op.field.codec().write(value, &mut buffer, offset)?;
                let written = end.saturating_sub(offset);
                debug_assert_eq!(
                    written,
                    op.payload_len,
                    "codec '{}' wrote a different length than it sized",
                    op.field.type_name()
                );
                if written != op.payload_len {
                    return Err(CodecError::invariant_violation(format!(
                        "codec '{}' sized {} bytes but wrote {}",
                        op.field.type_name(),
                        op.payload_len,
                        written
                    )));
                }
                offset = end;
            }
        }

        debug_assert_eq!(offset, buffer.len());
        Ok(buffer)
    }
}

/// Codecs report type errors under their own name; point them at the field.
fn with_field_name(err: CodecError, field: &FieldDefinition) -> CodecError {
    match err {
        CodecError::TypeMismatch {
            expected, found, ..
        } => CodecError::TypeMismatch {
            field: field.name().to_string(),
            expected,
            found,
        },
        other => other,
    }
}

/// Number of bytes `record` encodes to under `schema`.
pub fn encoded_len(schema: &Schema, record: &Record) -> Result<usize> {
    Ok(EncodePlan::build(schema, record)?.size())
}

/// Encode `record` into a buffer of exactly the required size.
///
/// Units appear in the record's entry order. Validation happens before the
/// buffer is allocated, so a failing record never allocates.
pub fn encode(schema: &Schema, record: &Record) -> Result<Vec<u8>> {
    let plan = EncodePlan::build(schema, record)?;
    let buffer = plan.execute()?;
    debug!(fields = plan.ops().len(), bytes = buffer.len(), "encoded record");
    Ok(buffer)
}

/// Decode a buffer produced by [`encode`] with the same schema.
///
/// Unit order does not matter. When a field index repeats, the last unit
/// wins.
///
/// # Errors
///
/// [`CodecError::CorruptData`] when a header names an index outside the
/// schema, uses the reserved presence bits, or a header or payload runs past
/// the end of the buffer.
pub fn decode(schema: &Schema, buffer: &[u8]) -> Result<Record> {
    let mut record = Record::new();
    let mut offset = 0;

    while offset < buffer.len() {
        let unit_start = offset;
        let header = HeaderByte::from_u8(buffer[offset], offset)?;
        offset += HEADER_SIZE;

        let (index, state) = header.unpack();
        let field = schema.field_at(index).ok_or_else(|| {
            CodecError::corrupt(
                unit_start,
                format!(
                    "field index {index} out of range for schema with {} fields",
                    schema.len()
                ),
            )
        })?;

        let slot = match state {
            PresenceState::Present => {
                let codec = field.codec();
                let value = codec
                    .read(buffer, offset)
                    .map_err(|e| as_corrupt(e, unit_start))?;
                let len = codec
                    .byte_length(&value)
                    .map_err(|e| as_corrupt(e, unit_start))?;
                offset += len;
                Slot::Value(value)
            }
            PresenceState::Null => Slot::Null,
            PresenceState::Undefined => Slot::Undefined,
        };

        if record.insert(field.name(), slot).is_some() {
            warn!(
                field = field.name(),
                offset = unit_start,
                "field appears more than once in buffer, keeping the last value"
            );
        }
    }

    // Only a codec whose read and byte_length disagree can overshoot.
    if offset != buffer.len() {
        return Err(CodecError::corrupt(
            buffer.len(),
            format!("last unit overran the buffer by {} bytes", offset - buffer.len()),
        ));
    }

    debug!(fields = record.len(), bytes = buffer.len(), "decoded record");
    Ok(record)
}

fn as_corrupt(err: CodecError, offset: usize) -> CodecError {
    match err {
        CodecError::CorruptData { .. } => err,
        other => CodecError::corrupt(offset, other.to_string()),
    }
}
