// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Round-trip integration tests.
//!
//! Tests cover:
//! - Encoding then decoding every built-in type, including range extremes
//! - Null, undefined and absent fields
//! - Unit order independence and length additivity
//! - Unknown field rejection and truncated buffer rejection
//! - Custom codecs plugged in through a registry

mod common;

use std::net::Ipv4Addr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use schemapack::encoding::{
    EncodePlan, IntegerCodec, TypeRegistryBuilder, HEADER_SIZE, MAX_STRING_BYTES,
};
use schemapack::{CodecError, FieldSpec, FieldValue, Record, Result, Schema, Slot, TypeCodec};

use common::all_types_schema;

fn date(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
}

fn full_record() -> Record {
    Record::new()
        .with("active", true)
        .with("created", date(1_700_000_000_123))
        .with("price", 1234.5678f64)
        .with("ratio", 0.25f32)
        .with("i8", -128i8)
        .with("i16", 32_767i16)
        .with("i32", -2_000_000_000i32)
        .with("i48", IntegerCodec::INT48.min())
        .with("u8", 255u8)
        .with("u16", 65_535u16)
        .with("u32", 4_000_000_000u32)
        .with("u48", IntegerCodec::UINT48.max() as u64)
        .with("label", "héllo wörld")
}

fn round_trip(schema: &Schema, record: &Record) -> Record {
    let bytes = schema.encode(record).unwrap();
    schema.decode(&bytes).unwrap()
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_round_trip_all_types() {
    let schema = all_types_schema();
    let record = full_record();
    assert_eq!(round_trip(&schema, &record), record);
}

#[test]
fn test_round_trip_preserves_unit_order() {
    let schema = all_types_schema();
    let record = full_record();
    let decoded = round_trip(&schema, &record);
    assert!(decoded.names().eq(record.names()));
}

#[test]
fn test_round_trip_extremes() {
    let schema = all_types_schema();
    let records = [
        Record::new()
            .with("i48", IntegerCodec::INT48.max())
            .with("u48", 0u64)
            .with("created", date(-(1i64 << 47)))
            .with("label", ""),
        Record::new()
            .with("i48", IntegerCodec::INT48.min())
            .with("created", date((1i64 << 47) - 1))
            .with("price", f64::MIN_POSITIVE)
            .with("ratio", f32::MAX)
            .with("label", "x".repeat(MAX_STRING_BYTES)),
        Record::new()
            .with("active", false)
            .with("price", -0.0f64)
            .with("created", date(0)),
    ];

    for record in &records {
        assert_eq!(&round_trip(&schema, record), record);
    }
}

#[test]
fn test_round_trip_nan() {
    let schema = all_types_schema();
    let record = Record::new().with("price", f64::NAN);
    let decoded = round_trip(&schema, &record);
    assert!(decoded.value("price").and_then(FieldValue::as_f64).unwrap().is_nan());
}

#[test]
fn test_integers_decode_to_canonical_kind() {
    let schema = all_types_schema();
    let record = Record::new().with("i16", 12u8).with("u32", 7i64);
    let decoded = round_trip(&schema, &record);
    assert_eq!(decoded.value("i16"), Some(&FieldValue::Int(12)));
    assert_eq!(decoded.value("u32"), Some(&FieldValue::UInt(7)));
}

#[test]
fn test_double_accepts_float() {
    let schema = all_types_schema();
    let record = Record::new().with("price", 1.5f32);
    let decoded = round_trip(&schema, &record);
    assert_eq!(decoded.value("price"), Some(&FieldValue::Double(1.5)));
}

// ============================================================================
// Presence states
// ============================================================================

#[test]
fn test_null_only_record() {
    let schema = Schema::new(&[FieldSpec::new("a", "uint8"), FieldSpec::new("b", "string")])
        .unwrap();
    let record = Record::new().with("a", Slot::Null);

    let bytes = schema.encode(&record).unwrap();
    assert_eq!(bytes.len(), HEADER_SIZE);
    assert_eq!(schema.decode(&bytes).unwrap(), record);
}

#[test]
fn test_mixed_presence_states() {
    let schema = all_types_schema();
    let mut record = Record::new();
    record.insert("label", "x");
    record.insert_null("u8");
    record.insert_undefined("created");

    let decoded = round_trip(&schema, &record);
    assert_eq!(decoded, record);
    assert_eq!(decoded.get("u8"), Some(&Slot::Null));
    assert_eq!(decoded.get("created"), Some(&Slot::Undefined));
    assert!(!decoded.contains("price"));
}

#[test]
fn test_absent_fields_leave_no_trace() {
    let schema = all_types_schema();
    let sparse = Record::new().with("u8", 1u8);
    assert_eq!(schema.encode(&sparse).unwrap(), vec![0x08, 0x01]);

    let decoded = round_trip(&schema, &sparse);
    assert_eq!(decoded.len(), 1);
}

#[test]
fn test_empty_record() {
    let schema = all_types_schema();
    let bytes = schema.encode(&Record::new()).unwrap();
    assert!(bytes.is_empty());
    assert_eq!(schema.decode(&[]).unwrap(), Record::new());
}

// ============================================================================
// Wire properties
// ============================================================================

#[test]
fn test_scenario_uint8_and_string() {
    let schema = Schema::new(&[FieldSpec::new("a", "uint8"), FieldSpec::new("b", "string")])
        .unwrap();
    let record = Record::new().with("a", 7u8).with("b", "hi");

    let bytes = schema.encode(&record).unwrap();
    assert_eq!(bytes, vec![0x00, 0x07, 0x01, 0x00, 0x02, b'h', b'i']);

    let decoded = schema.decode(&bytes).unwrap();
    assert_eq!(decoded.value("a"), Some(&FieldValue::UInt(7)));
    assert_eq!(decoded.value("b"), Some(&FieldValue::from("hi")));
}

#[test]
fn test_order_independence() {
    let schema = all_types_schema();
    let forward = full_record();
    let backward: Record = {
        let mut entries: Vec<(String, Slot)> = forward
            .iter()
            .map(|(name, slot)| (name.to_string(), slot.clone()))
            .collect();
        entries.reverse();
        entries.into_iter().collect()
    };

    let a = schema.encode(&forward).unwrap();
    let b = schema.encode(&backward).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.len(), b.len());
    assert_eq!(schema.decode(&a).unwrap(), schema.decode(&b).unwrap());
}

#[test]
fn test_length_additivity() {
    let schema = all_types_schema();
    let mut record = full_record();
    record.insert_null("ratio");
    record.insert_undefined("i8");

    let expected: usize = record
        .iter()
        .map(|(name, slot)| {
            let payload = match slot {
                Slot::Value(value) => schema.field(name).unwrap().codec().byte_length(value).unwrap(),
                Slot::Null | Slot::Undefined => 0,
            };
            HEADER_SIZE + payload
        })
        .sum();

    assert_eq!(schema.encode(&record).unwrap().len(), expected);
    assert_eq!(schema.encoded_len(&record).unwrap(), expected);
}

#[test]
fn test_unknown_field_rejected() {
    let schema = all_types_schema();
    let record = full_record().with("mystery", 1u8);

    let err = schema.encode(&record).unwrap_err();
    assert!(matches!(err, CodecError::UnknownField { ref name } if name == "mystery"));
    assert!(schema.encoded_len(&record).is_err());
}

#[test]
fn test_out_of_range_rejected_before_write() {
    let schema = all_types_schema();
    for record in [
        Record::new().with("u8", 256u16),
        Record::new().with("i8", -129i16),
        Record::new().with("u48", 1u64 << 48),
        Record::new().with("u16", -1i8),
        Record::new().with("label", "x".repeat(MAX_STRING_BYTES + 1)),
        Record::new().with("created", date(1i64 << 47)),
    ] {
        assert!(matches!(
            schema.encode(&record),
            Err(CodecError::ValueOutOfRange { .. })
        ));
    }
}

#[test]
fn test_type_mismatch_rejected() {
    let schema = all_types_schema();
    for (field, value) in [
        ("active", FieldValue::UInt(1)),
        ("ratio", FieldValue::Double(0.5)),
        ("label", FieldValue::Int(3)),
        ("created", FieldValue::from("2024-01-01")),
        ("i32", FieldValue::Float(1.0)),
    ] {
        let record = Record::new().with(field, value);
        let err = schema.encode(&record).unwrap_err();
        assert!(
            matches!(err, CodecError::TypeMismatch { field: ref f, .. } if f == field),
            "unexpected error for {field}: {err}"
        );
    }
}

// ============================================================================
// Corrupt input
// ============================================================================

#[test]
fn test_truncation_inside_a_unit_rejected() {
    let schema = all_types_schema();
    let mut record = full_record();
    record.insert_null("ratio");

    let bytes = schema.encode(&record).unwrap();
    let plan = EncodePlan::build(&schema, &record).unwrap();

    let mut boundaries = vec![0];
    for op in plan.ops() {
        boundaries.push(boundaries.last().unwrap() + op.len());
    }
    assert_eq!(*boundaries.last().unwrap(), bytes.len());

    for cut in 0..bytes.len() {
        let result = schema.decode(&bytes[..cut]);
        match boundaries.iter().position(|&b| b == cut) {
            Some(units) => {
                let prefix: Record = record
                    .iter()
                    .take(units)
                    .map(|(name, slot)| (name.to_string(), slot.clone()))
                    .collect();
                assert_eq!(result.unwrap(), prefix, "cut at unit boundary {cut}");
            }
            None => {
                let err = result.unwrap_err();
                assert!(err.is_corrupt_data(), "cut at {cut}: {err}");
            }
        }
    }
}

#[test]
fn test_single_unit_truncation_rejected() {
    let schema = Schema::new(&[FieldSpec::new("b", "string")]).unwrap();
    let bytes = schema.encode(&Record::new().with("b", "hello")).unwrap();

    for trim in 1..bytes.len() {
        let err = schema.decode(&bytes[..bytes.len() - trim]).unwrap_err();
        assert!(err.is_corrupt_data());
    }
}

#[test]
fn test_corrupt_headers_rejected() {
    let schema = all_types_schema();
    // index 13 is one past the last field
    assert!(schema.decode(&[0x0D]).unwrap_err().is_corrupt_data());
    // reserved presence bits
    assert!(schema.decode(&[0xC0]).unwrap_err().is_corrupt_data());
    // boolean payload other than 0/1
    assert!(schema.decode(&[0x00, 0x02]).unwrap_err().is_corrupt_data());
    // invalid UTF-8 in a string payload
    assert!(schema
        .decode(&[0x0C, 0x00, 0x02, 0xFF, 0xFE])
        .unwrap_err()
        .is_corrupt_data());
}

#[test]
fn test_buffer_from_other_schema() {
    let wide = all_types_schema();
    let narrow = Schema::new(&[FieldSpec::new("a", "uint8")]).unwrap();
    let bytes = wide.encode(&Record::new().with("label", "x")).unwrap();

    assert!(narrow.decode(&bytes).unwrap_err().is_corrupt_data());
}

// ============================================================================
// Custom codecs
// ============================================================================

/// IPv4 address carried as a dotted string, stored in four bytes.
struct Ipv4Codec;

impl Ipv4Codec {
    fn address(value: &FieldValue) -> Result<Ipv4Addr> {
        let text = value
            .as_str()
            .ok_or_else(|| CodecError::type_mismatch("ipv4", "ipv4", value.kind()))?;
        text.parse()
            .map_err(|_| CodecError::out_of_range("ipv4", text))
    }
}

impl TypeCodec for Ipv4Codec {
    fn name(&self) -> &str {
        "ipv4"
    }

    fn byte_length(&self, value: &FieldValue) -> Result<usize> {
        Self::address(value).map(|_| 4)
    }

    fn write(&self, value: &FieldValue, buffer: &mut [u8], offset: usize) -> Result<usize> {
        let octets = Self::address(value)?.octets();
        buffer[offset..offset + 4].copy_from_slice(&octets);
        Ok(offset + 4)
    }

    fn read(&self, buffer: &[u8], offset: usize) -> Result<FieldValue> {
        let octets: [u8; 4] = buffer
            .get(offset..offset + 4)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| CodecError::truncated(4, buffer.len().saturating_sub(offset), offset))?;
        Ok(FieldValue::String(Ipv4Addr::from(octets).to_string()))
    }

    fn fixed_width(&self) -> Option<usize> {
        Some(4)
    }
}

#[test]
fn test_custom_codec_round_trip() {
    let registry = TypeRegistryBuilder::with_builtins()
        .register(Ipv4Codec)
        .unwrap()
        .build();
    let schema = Schema::compile(
        &[FieldSpec::new("host", "ipv4"), FieldSpec::new("port", "uint16")],
        &registry,
    )
    .unwrap();

    let record = Record::new().with("host", "10.0.0.1").with("port", 8080u16);
    let bytes = schema.encode(&record).unwrap();
    assert_eq!(bytes, vec![0x00, 10, 0, 0, 1, 0x01, 0x1F, 0x90]);
    assert_eq!(schema.decode(&bytes).unwrap(), record);

    let bad = Record::new().with("host", "not-an-address");
    assert!(matches!(
        schema.encode(&bad),
        Err(CodecError::ValueOutOfRange { .. })
    ));
    assert!(schema.decode(&[0x00, 10, 0]).unwrap_err().is_corrupt_data());
}

#[test]
fn test_custom_type_unknown_to_builtins() {
    let err = Schema::new(&[FieldSpec::new("host", "ipv4")]).unwrap_err();
    assert!(matches!(err, CodecError::UnknownType { .. }));
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_schema_shared_across_threads() {
    let schema = Arc::new(all_types_schema());

    std::thread::scope(|scope| {
        for i in 0..8u32 {
            let schema = Arc::clone(&schema);
            scope.spawn(move || {
                let record = Record::new().with("u32", i).with("label", format!("worker-{i}"));
                for _ in 0..100 {
                    assert_eq!(round_trip(&schema, &record), record);
                }
            });
        }
    });
}
