// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Default instances, shared by the builder and the frozen schema.

use super::{PrimitiveKind, SchemaError, TypeDescriptor, TypeKind};
use crate::value::{EnumValue, Value};

/// Nesting depth past which a type is treated as non-instantiable.
const MAX_DEFAULT_DEPTH: usize = 64;

/// Anything that can turn a reference into its descriptor.
pub(crate) trait TypeTable {
    type Ref;

    fn describe(&self, r: &Self::Ref) -> Result<&TypeDescriptor<Self::Ref>, SchemaError>;
}

/// Zero value of a type.
///
/// Enums default to their first variant that can be instantiated without
/// re-entering a type already being built; sequences, maps and options
/// default to empty.
pub(crate) fn default_value<T: TypeTable>(table: &T, r: &T::Ref) -> Result<Value, SchemaError> {
    let mut building = Vec::new();
    default_at(table, r, &mut building)
}

fn default_at<'t, T: TypeTable>(
    table: &'t T,
    r: &T::Ref,
    building: &mut Vec<&'t str>,
) -> Result<Value, SchemaError> {
    let desc = table.describe(r)?;
    if building.len() > MAX_DEFAULT_DEPTH || building.contains(&desc.name.as_str()) {
        return Err(SchemaError::RecursionLimit(desc.name.clone()));
    }
    building.push(&desc.name);
    let value = default_kind(table, desc, building);
    building.pop();
    value
}

fn default_kind<'t, T: TypeTable>(
    table: &'t T,
    desc: &'t TypeDescriptor<T::Ref>,
    building: &mut Vec<&'t str>,
) -> Result<Value, SchemaError> {
    Ok(match &desc.kind {
        TypeKind::Primitive(p) => primitive_default(*p),
        TypeKind::Struct(fields) => Value::Struct(
            fields
                .iter()
                .map(|f| Ok((f.name.clone(), default_at(table, &f.type_ref, building)?)))
                .collect::<Result<_, SchemaError>>()?,
        ),
        TypeKind::Enum(e) => {
            let mut last_err = SchemaError::Uninhabited(desc.name.clone());
            for variant in &e.variants {
                let payload = match &variant.payload {
                    Some(p) => default_at(table, p, building),
                    None => Ok(Value::Unit),
                };
                match payload {
                    Ok(payload) => {
                        return Ok(Value::Enum(EnumValue::new(
                            variant.name.clone(),
                            variant.discriminant,
                            payload,
                        )))
                    }
                    Err(err @ SchemaError::RecursionLimit(_)) => last_err = err,
                    Err(err) => return Err(err),
                }
            }
            return Err(last_err);
        }
        TypeKind::Tuple(elements) => Value::Tuple(
            elements
                .iter()
                .map(|e| default_at(table, e, building))
                .collect::<Result<_, _>>()?,
        ),
        TypeKind::Sequence(_) => Value::Sequence(Vec::new()),
        TypeKind::Array { element, length } => {
            let element = default_at(table, element, building)?;
            Value::Array(vec![element; *length])
        }
        TypeKind::Option(_) => Value::Option(None),
        TypeKind::Map { .. } => Value::Map(Vec::new()),
    })
}

fn primitive_default(kind: PrimitiveKind) -> Value {
    match kind {
        PrimitiveKind::Unit => Value::Unit,
        PrimitiveKind::Bool => Value::Bool(false),
        PrimitiveKind::U8 => Value::U8(0),
        PrimitiveKind::U16 => Value::U16(0),
        PrimitiveKind::U32 => Value::U32(0),
        PrimitiveKind::U64 => Value::U64(0),
        PrimitiveKind::U128 => Value::U128(0),
        PrimitiveKind::I8 => Value::I8(0),
        PrimitiveKind::I16 => Value::I16(0),
        PrimitiveKind::I32 => Value::I32(0),
        PrimitiveKind::I64 => Value::I64(0),
        PrimitiveKind::I128 => Value::I128(0),
        PrimitiveKind::Compact => Value::Compact(0),
        PrimitiveKind::String => Value::String(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaBuilder, TypeSpec, VariantSpec};

    #[test]
    fn test_defaults_by_kind() {
        let mut b = SchemaBuilder::new();
        let bytes = b.array_of("u8", 3);
        let maybe = b.option_of("u64");
        let list = b.vec_of("t.S");
        let s = b
            .make_struct(
                "t.S",
                [
                    ("flag", TypeSpec::from("bool")),
                    ("name", TypeSpec::from("String")),
                    ("bytes", TypeSpec::from(bytes)),
                    ("maybe", TypeSpec::from(maybe)),
                    ("list", TypeSpec::from(list)),
                ],
            )
            .expect("S");
        let v = b.default_value(&s).expect("default");
        assert_eq!(v.get_field("flag"), Some(&Value::Bool(false)));
        assert_eq!(v.get_field("name"), Some(&Value::String(String::new())));
        assert_eq!(
            v.get_field("bytes"),
            Some(&Value::Array(vec![Value::U8(0); 3]))
        );
        assert_eq!(v.get_field("maybe"), Some(&Value::Option(None)));
        assert_eq!(v.get_field("list"), Some(&Value::Sequence(Vec::new())));
    }

    #[test]
    fn test_enum_defaults_to_first_variant() {
        let mut b = SchemaBuilder::new();
        let e = b
            .make_enum(
                "t.E",
                [VariantSpec::new("Num", "u32").with_index(4), VariantSpec::unit("Nil")],
            )
            .expect("E");
        let v = b.default_value(&e).expect("default");
        let active = v.as_enum().expect("enum");
        assert_eq!(active.variant, "Num");
        assert_eq!(active.discriminant, 4);
        assert_eq!(*active.payload, Value::U32(0));
    }

    #[test]
    fn test_empty_enum_is_uninhabited() {
        let mut b = SchemaBuilder::new();
        let e = b.make_enum("t.Never", Vec::<VariantSpec>::new()).expect("Never");
        let err = b.default_value(&e).unwrap_err();
        assert_eq!(err, SchemaError::Uninhabited("t.Never".into()));
    }

    #[test]
    fn test_unbounded_recursion_detected() {
        let mut b = SchemaBuilder::new();
        let s = b.make_struct("t.Loop", [("next", "t.Loop")]).expect("Loop");
        let err = b.default_value(&s).unwrap_err();
        assert_eq!(err, SchemaError::RecursionLimit("t.Loop".into()));
    }

    #[test]
    fn test_recursive_enum_skips_cyclic_variants() {
        let mut b = SchemaBuilder::new();
        b.make_enum(
            "t.Expr",
            [
                VariantSpec::new("Not", "t.Boxed"),
                VariantSpec::new("Raw", "u8"),
            ],
        )
        .expect("Expr");
        let boxed = b.make_struct("t.Boxed", [("inner", "t.Expr")]).expect("Boxed");
        let v = b.default_value(&boxed).expect("default");
        let inner = v.get_field("inner").and_then(Value::as_enum).expect("inner");
        assert_eq!(inner.variant, "Raw");
        assert_eq!(*inner.payload, Value::U8(0));
    }
}
