// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SCALE encoder driven by a resolved schema.

use super::compact::encode_compact;
use super::CodecError;
use crate::config::CodecConfig;
use crate::schema::{EnumDescriptor, FieldDescriptor, PrimitiveKind, Schema, TypeId, TypeKind};
use crate::value::{EnumValue, Value};

/// Writes values of schema types into a byte buffer.
///
/// Only the value shapes the decoder produces are accepted, and the decoder's
/// default limits apply, so anything written here decodes back to itself.
pub(crate) struct Encoder<'s> {
    schema: &'s Schema,
    buffer: Vec<u8>,
    max_depth: usize,
    max_len: usize,
    depth: usize,
}

impl<'s> Encoder<'s> {
    pub(crate) fn new(schema: &'s Schema, buffer: Vec<u8>) -> Self {
        let limits = CodecConfig::default();
        Self {
            schema,
            buffer,
            max_depth: limits.max_depth,
            max_len: limits.max_sequence_len,
            depth: 0,
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub(crate) fn encode_value(&mut self, ty: TypeId, value: &Value) -> Result<(), CodecError> {
        if self.depth >= self.max_depth {
            return Err(CodecError::DepthLimit(self.max_depth));
        }
        self.depth += 1;
        let result = self.encode_kind(ty, value);
        self.depth -= 1;
        result
    }

    fn write_len(&mut self, len: usize) -> Result<(), CodecError> {
        if len > self.max_len {
            return Err(CodecError::LengthLimit {
                len: len as u128,
                max: self.max_len,
            });
        }
        encode_compact(len as u128, &mut self.buffer);
        Ok(())
    }

    fn encode_kind(&mut self, ty: TypeId, value: &Value) -> Result<(), CodecError> {
        let schema = self.schema;
        let desc = schema.get(ty).ok_or(CodecError::UnknownType(ty))?;
        match &desc.kind {
            TypeKind::Primitive(p) => self.encode_primitive(*p, value),
            TypeKind::Struct(fields) => match value {
                Value::Struct(given) => self.encode_struct(&desc.name, fields, given),
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
            TypeKind::Enum(e) => match value {
                Value::Enum(ev) => self.encode_enum(&desc.name, e, ev),
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
            TypeKind::Tuple(elements) => match value {
                Value::Tuple(items) => {
                    if items.len() != elements.len() {
                        return Err(CodecError::FieldCountMismatch {
                            type_name: desc.name.clone(),
                            expected: elements.len(),
                            found: items.len(),
                        });
                    }
                    for (element, item) in elements.iter().zip(items) {
                        self.encode_value(*element, item)?;
                    }
                    Ok(())
                }
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
            TypeKind::Sequence(element) => match value {
                Value::Sequence(items) => {
                    self.write_len(items.len())?;
                    for item in items {
                        self.encode_value(*element, item)?;
                    }
                    Ok(())
                }
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
            TypeKind::Array { element, length } => match value {
                Value::Array(items) => {
                    if items.len() != *length {
                        return Err(CodecError::ArrayLength {
                            type_name: desc.name.clone(),
                            expected: *length,
                            found: items.len(),
                        });
                    }
                    for item in items {
                        self.encode_value(*element, item)?;
                    }
                    Ok(())
                }
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
            TypeKind::Option(inner) => match value {
                Value::Option(opt) => self.encode_option(&desc.name, *inner, opt.as_deref()),
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
            TypeKind::Map { key, value: val } => match value {
                Value::Map(pairs) => {
                    self.write_len(pairs.len())?;
                    for (k, v) in pairs {
                        self.encode_value(*key, k)?;
                        self.encode_value(*val, v)?;
                    }
                    Ok(())
                }
                other => Err(CodecError::mismatch(desc.name.as_str(), other)),
            },
        }
    }

    fn encode_struct(
        &mut self,
        type_name: &str,
        fields: &[FieldDescriptor<TypeId>],
        given: &[(String, Value)],
    ) -> Result<(), CodecError> {
        if given.len() != fields.len() {
            return Err(CodecError::FieldCountMismatch {
                type_name: type_name.to_string(),
                expected: fields.len(),
                found: given.len(),
            });
        }
        for (field, (name, value)) in fields.iter().zip(given) {
            if *name != field.name {
                if given.iter().any(|(n, _)| *n == field.name) {
                    return Err(CodecError::FieldOrder {
                        type_name: type_name.to_string(),
                        expected: field.name.clone(),
                        found: name.clone(),
                    });
                }
                return Err(CodecError::MissingField {
                    type_name: type_name.to_string(),
                    field: field.name.clone(),
                });
            }
            self.encode_value(field.type_ref, value)?;
        }
        Ok(())
    }

    fn encode_enum(
        &mut self,
        type_name: &str,
        desc: &EnumDescriptor<TypeId>,
        value: &EnumValue,
    ) -> Result<(), CodecError> {
        let variant = desc
            .variant_by_discriminant(value.discriminant)
            .ok_or_else(|| CodecError::UnknownVariant {
                type_name: type_name.to_string(),
                discriminant: value.discriminant,
            })?;
        if variant.name != value.variant {
            return Err(CodecError::VariantMismatch {
                type_name: type_name.to_string(),
                variant: value.variant.clone(),
                discriminant: value.discriminant,
            });
        }
        self.buffer.push(variant.discriminant);
        match variant.payload {
            Some(payload) => self.encode_value(payload, &value.payload),
            None => match value.payload.as_ref() {
                Value::Unit => Ok(()),
                other => Err(CodecError::mismatch(
                    format!("no payload for {}::{}", type_name, variant.name),
                    other,
                )),
            },
        }
    }

    fn encode_option(
        &mut self,
        type_name: &str,
        inner: TypeId,
        value: Option<&Value>,
    ) -> Result<(), CodecError> {
        let schema = self.schema;
        let is_bool = matches!(
            schema.get(inner).map(|d| &d.kind),
            Some(TypeKind::Primitive(PrimitiveKind::Bool))
        );
        match value {
            None => self.buffer.push(0),
            Some(Value::Bool(b)) if is_bool => self.buffer.push(if *b { 1 } else { 2 }),
            Some(other) if is_bool => return Err(CodecError::mismatch(type_name, other)),
            Some(v) => {
                self.buffer.push(1);
                self.encode_value(inner, v)?;
            }
        }
        Ok(())
    }

    fn encode_primitive(&mut self, kind: PrimitiveKind, value: &Value) -> Result<(), CodecError> {
        if let (PrimitiveKind::String, Value::String(s)) = (kind, value) {
            self.write_len(s.len())?;
            self.buffer.extend_from_slice(s.as_bytes());
            return Ok(());
        }
        let out = &mut self.buffer;
        match (kind, value) {
            (PrimitiveKind::Unit, Value::Unit) => {}
            (PrimitiveKind::Bool, Value::Bool(v)) => out.push(u8::from(*v)),
            (PrimitiveKind::U8, Value::U8(v)) => out.push(*v),
            (PrimitiveKind::U16, Value::U16(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::U32, Value::U32(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::U64, Value::U64(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::U128, Value::U128(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::I8, Value::I8(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::I16, Value::I16(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::I32, Value::I32(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::I64, Value::I64(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::I128, Value::I128(v)) => out.extend(&v.to_le_bytes()),
            (PrimitiveKind::Compact, Value::Compact(v)) => encode_compact(*v, out),
            (kind, other) => return Err(CodecError::mismatch(kind.name(), other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaBuilder, VariantSpec};

    fn encode(schema: &Schema, name: &str, value: &Value) -> Result<Vec<u8>, CodecError> {
        let ty = schema.type_id(name).expect("type");
        let mut encoder = Encoder::new(schema, Vec::new());
        encoder.encode_value(ty, value)?;
        Ok(encoder.into_bytes())
    }

    #[test]
    fn test_primitives_little_endian() {
        let schema = SchemaBuilder::new().resolve_all().expect("resolve");
        assert_eq!(
            encode(&schema, "u32", &Value::U32(0x0102_0304)).expect("u32"),
            vec![0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            encode(&schema, "i16", &Value::I16(-2)).expect("i16"),
            vec![0xfe, 0xff]
        );
        assert_eq!(encode(&schema, "bool", &Value::Bool(true)).expect("bool"), vec![1]);
        assert_eq!(encode(&schema, "()", &Value::Unit).expect("unit"), Vec::<u8>::new());
        assert_eq!(
            encode(&schema, "String", &Value::from("abc")).expect("string"),
            vec![0x0c, b'a', b'b', b'c']
        );
        assert_eq!(
            encode(&schema, "Compact", &Value::Compact(64)).expect("compact"),
            vec![0x01, 0x01]
        );
    }

    #[test]
    fn test_primitive_type_mismatch() {
        let schema = SchemaBuilder::new().resolve_all().expect("resolve");
        let err = encode(&schema, "u32", &Value::U64(1)).unwrap_err();
        assert_eq!(
            err,
            CodecError::TypeMismatch {
                expected: "u32".into(),
                found: "u64".into()
            }
        );
    }

    #[test]
    fn test_struct_fields_must_follow_declared_order() {
        let mut b = SchemaBuilder::new();
        b.make_struct("t.Pair", [("a", "u8"), ("b", "u16")])
            .expect("Pair");
        let schema = b.resolve_all().expect("resolve");

        let ordered = Value::structure([("a", Value::U8(1)), ("b", Value::U16(0x0302))]);
        assert_eq!(
            encode(&schema, "t.Pair", &ordered).expect("encode"),
            vec![1, 2, 3]
        );

        let reversed = Value::structure([("b", Value::U16(0x0302)), ("a", Value::U8(1))]);
        assert!(matches!(
            encode(&schema, "t.Pair", &reversed),
            Err(CodecError::FieldOrder { expected, found, .. }) if expected == "a" && found == "b"
        ));
    }

    #[test]
    fn test_struct_arity_errors() {
        let mut b = SchemaBuilder::new();
        b.make_struct("t.Pair", [("a", "u8"), ("b", "u8")])
            .expect("Pair");
        let schema = b.resolve_all().expect("resolve");

        let short = Value::structure([("a", Value::U8(1))]);
        assert!(matches!(
            encode(&schema, "t.Pair", &short),
            Err(CodecError::FieldCountMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));

        let renamed = Value::structure([("a", Value::U8(1)), ("c", Value::U8(2))]);
        assert!(matches!(
            encode(&schema, "t.Pair", &renamed),
            Err(CodecError::MissingField { field, .. }) if field == "b"
        ));
    }

    #[test]
    fn test_enum_tag_and_payload() {
        let mut b = SchemaBuilder::new();
        b.make_enum("t.E", [VariantSpec::unit("A"), VariantSpec::new("B", "u8")])
            .expect("E");
        let schema = b.resolve_all().expect("resolve");

        let a = Value::from(EnumValue::new("A", 0, Value::Unit));
        assert_eq!(encode(&schema, "t.E", &a).expect("A"), vec![0]);

        let b_val = Value::from(EnumValue::new("B", 1, Value::U8(9)));
        assert_eq!(encode(&schema, "t.E", &b_val).expect("B"), vec![1, 9]);

        let wrong_tag = Value::from(EnumValue::new("A", 1, Value::U8(9)));
        assert!(matches!(
            encode(&schema, "t.E", &wrong_tag),
            Err(CodecError::VariantMismatch { .. })
        ));

        let unknown = Value::from(EnumValue::new("C", 5, Value::Unit));
        assert!(matches!(
            encode(&schema, "t.E", &unknown),
            Err(CodecError::UnknownVariant { discriminant: 5, .. })
        ));

        let payload_on_bare = Value::from(EnumValue::new("A", 0, Value::U8(1)));
        assert!(matches!(
            encode(&schema, "t.E", &payload_on_bare),
            Err(CodecError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_option_bool_single_byte() {
        let mut b = SchemaBuilder::new();
        b.option_of("bool");
        b.option_of("u8");
        let schema = b.resolve_all().expect("resolve");

        assert_eq!(encode(&schema, "Option<bool>", &Value::none()).expect("none"), vec![0]);
        assert_eq!(
            encode(&schema, "Option<bool>", &Value::some(Value::Bool(true))).expect("true"),
            vec![1]
        );
        assert_eq!(
            encode(&schema, "Option<bool>", &Value::some(Value::Bool(false))).expect("false"),
            vec![2]
        );
        assert_eq!(
            encode(&schema, "Option<u8>", &Value::some(Value::U8(7))).expect("some"),
            vec![1, 7]
        );
    }

    #[test]
    fn test_array_length_checked() {
        let mut b = SchemaBuilder::new();
        b.array_of("u8", 2);
        let schema = b.resolve_all().expect("resolve");

        assert_eq!(
            encode(&schema, "[u8; 2]", &Value::Array(vec![Value::U8(1), Value::U8(2)]))
                .expect("array"),
            vec![1, 2]
        );
        assert!(matches!(
            encode(&schema, "[u8; 2]", &Value::Array(vec![Value::U8(1)])),
            Err(CodecError::ArrayLength {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_canonical_shapes() {
        let mut b = SchemaBuilder::new();
        b.vec_of("u8");
        b.array_of("u8", 1);
        b.make_tuple("t.Empty", Vec::<&str>::new()).expect("Empty");
        let schema = b.resolve_all().expect("resolve");

        let one = vec![Value::U8(1)];
        assert!(encode(&schema, "Vec<u8>", &Value::Array(one.clone())).is_err());
        assert!(encode(&schema, "[u8; 1]", &Value::Sequence(one)).is_err());
        assert!(encode(&schema, "Compact", &Value::U64(5)).is_err());
        assert!(encode(&schema, "Compact", &Value::U32(5)).is_err());
        assert!(encode(&schema, "Compact", &Value::U128(5)).is_err());
        assert!(encode(&schema, "t.Empty", &Value::Unit).is_err());
        assert_eq!(
            encode(&schema, "t.Empty", &Value::empty_tuple()).expect("empty"),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn test_depth_limit_matches_decoder() {
        let mut b = SchemaBuilder::new();
        b.make_enum(
            "t.List",
            [VariantSpec::unit("Nil"), VariantSpec::new("Cons", "t.List")],
        )
        .expect("List");
        let schema = b.resolve_all().expect("resolve");
        let ty = schema.type_id("t.List").expect("List");

        let nest = |depth: usize| {
            let mut value = Value::from(EnumValue::new("Nil", 0, Value::Unit));
            for _ in 0..depth {
                value = Value::from(EnumValue::new("Cons", 1, value));
            }
            value
        };

        let limit = CodecConfig::default().max_depth;
        let fits = nest(limit - 1);
        let bytes = encode(&schema, "t.List", &fits).expect("encode at limit");
        assert_eq!(schema.decode(ty, &bytes), Ok(fits));

        assert_eq!(
            encode(&schema, "t.List", &nest(200)),
            Err(CodecError::DepthLimit(limit))
        );
        assert_eq!(
            encode(&schema, "t.List", &nest(limit)),
            Err(CodecError::DepthLimit(limit))
        );
    }
}
