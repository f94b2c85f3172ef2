// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Property tests: decode(encode(v)) == v.

use iroha_schema::codec::{compact_len, decode_compact, encode_compact};
use iroha_schema::{Schema, SchemaBuilder, Value, VariantSpec};
use proptest::prelude::*;
use std::sync::OnceLock;

fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let mut b = SchemaBuilder::new();
        b.make_struct(
            "p.Record",
            [
                ("id", "u64"),
                ("delta", "i32"),
                ("name", "String"),
                ("blob", "Vec<u8>"),
                ("flag", "Option<bool>"),
                ("limit", "Option<u32>"),
                ("amount", "Compact"),
                ("shape", "p.Shape"),
                ("labels", "Map<String, u128>"),
            ],
        )
        .expect("Record");
        b.make_enum(
            "p.Shape",
            [
                VariantSpec::unit("Point"),
                VariantSpec::new("Line", "u16"),
                VariantSpec::new("Nested", "p.Shape").with_index(9),
            ],
        )
        .expect("Shape");
        b.vec_of("u8");
        b.option_of("bool");
        b.option_of("u32");
        b.map_of("String", "u128");
        b.resolve_all().expect("resolve")
    })
}

fn shape_value(depth: u8, line: Option<u16>) -> Value {
    let ty = schema().type_id("p.Shape").expect("Shape");
    let mut value = match line {
        Some(n) => schema().variant(ty, "Line", Value::U16(n)),
        None => schema().variant(ty, "Point", Value::Unit),
    }
    .expect("variant");
    for _ in 0..depth {
        value = schema().variant(ty, "Nested", value).expect("Nested");
    }
    value
}

prop_compose! {
    fn record()(
        id in any::<u64>(),
        delta in any::<i32>(),
        name in ".{0,24}",
        blob in proptest::collection::vec(any::<u8>(), 0..80),
        flag in proptest::option::of(any::<bool>()),
        limit in proptest::option::of(any::<u32>()),
        amount in any::<u128>(),
        depth in 0u8..6,
        line in proptest::option::of(any::<u16>()),
        labels in proptest::collection::vec((".{0,6}", any::<u128>()), 0..4),
    ) -> Value {
        Value::structure([
            ("id", Value::U64(id)),
            ("delta", Value::I32(delta)),
            ("name", Value::String(name)),
            ("blob", Value::from(blob)),
            ("flag", Value::from(flag)),
            ("limit", Value::from(limit)),
            ("amount", Value::Compact(amount)),
            ("shape", shape_value(depth, line)),
            (
                "labels",
                Value::Map(
                    labels
                        .into_iter()
                        .map(|(k, v)| (Value::String(k), Value::U128(v)))
                        .collect(),
                ),
            ),
        ])
    }
}

proptest! {
    #[test]
    fn prop_compact_roundtrip(value in any::<u128>()) {
        let mut bytes = Vec::new();
        encode_compact(value, &mut bytes);
        prop_assert_eq!(bytes.len(), compact_len(value));
        prop_assert_eq!(decode_compact(&bytes), Ok((value, bytes.len())));
    }

    #[test]
    fn prop_compact_small_values(value in 0u128..(1 << 30)) {
        let mut bytes = Vec::new();
        encode_compact(value, &mut bytes);
        let expected = if value < 1 << 6 { 1 } else if value < 1 << 14 { 2 } else { 4 };
        prop_assert_eq!(bytes.len(), expected);
    }

    #[test]
    fn prop_record_roundtrip(value in record()) {
        let schema = schema();
        let ty = schema.type_id("p.Record").expect("Record");
        let bytes = schema.encode(ty, &value).expect("encode");
        prop_assert_eq!(schema.decode(ty, &bytes), Ok(value));
    }

    #[test]
    fn prop_truncation_never_panics(value in record(), cut in any::<prop::sample::Index>()) {
        let schema = schema();
        let ty = schema.type_id("p.Record").expect("Record");
        let bytes = schema.encode(ty, &value).expect("encode");
        let cut = cut.index(bytes.len());
        prop_assert!(schema.decode(ty, &bytes[..cut]).is_err());
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let schema = schema();
        let ty = schema.type_id("p.Record").expect("Record");
        let _ = schema.decode(ty, &bytes);
    }
}

fn sample_record() -> Value {
    Value::structure([
        ("id", Value::U64(1)),
        ("delta", Value::I32(-1)),
        ("name", Value::from("r")),
        ("blob", Value::from(vec![1u8, 2])),
        ("flag", Value::none()),
        ("limit", Value::some(Value::U32(9))),
        ("amount", Value::Compact(5)),
        ("shape", shape_value(0, None)),
        ("labels", Value::Map(Vec::new())),
    ])
}

fn with_field(name: &str, replacement: Value) -> Value {
    let mut value = sample_record();
    assert!(value.set_field(name, replacement));
    value
}

#[test]
fn test_values_decode_never_yields_are_rejected() {
    let schema = schema();
    let ty = schema.type_id("p.Record").expect("Record");
    assert!(schema.validate(ty, &sample_record()).is_ok());

    let aliases = [
        ("blob", Value::Array(vec![Value::U8(1), Value::U8(2)])),
        ("amount", Value::U64(5)),
        ("amount", Value::U32(5)),
        ("amount", Value::U128(5)),
        ("id", Value::Compact(1)),
    ];
    for (field, alias) in aliases {
        let value = with_field(field, alias.clone());
        assert!(
            schema.validate(ty, &value).is_err(),
            "{field} accepted {alias:?}"
        );
        assert!(schema.encode(ty, &value).is_err());
    }

    let Value::Struct(mut fields) = sample_record() else {
        panic!("record is a struct");
    };
    fields.swap(0, 1);
    assert!(schema.validate(ty, &Value::Struct(fields)).is_err());
}

#[test]
fn test_zero_arity_tuple_only_accepts_empty_tuple() {
    let mut b = SchemaBuilder::new();
    b.make_tuple("p.NoArgs", Vec::<&str>::new()).expect("NoArgs");
    b.array_of("u8", 2);
    let schema = b.resolve_all().expect("resolve");

    let no_args = schema.type_id("p.NoArgs").expect("NoArgs");
    assert!(schema.encode(no_args, &Value::Unit).is_err());
    let bytes = schema.encode(no_args, &Value::empty_tuple()).expect("encode");
    assert_eq!(schema.decode(no_args, &bytes), Ok(Value::empty_tuple()));

    let array = schema.type_id("[u8; 2]").expect("array");
    let as_sequence = Value::Sequence(vec![Value::U8(1), Value::U8(2)]);
    assert!(schema.encode(array, &as_sequence).is_err());
}
