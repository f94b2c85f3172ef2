// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.
//!
//! Values are ordinary owned data. They carry no link to the schema; a
//! value conforms to a type structurally and is checked when it is
//! validated or encoded.

use serde::{Deserialize, Serialize};

/// A value of any schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    // Primitives
    Unit,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Compact(u128),
    String(String),

    // Containers
    Sequence(Vec<Value>),
    Array(Vec<Value>),
    Option(Option<Box<Value>>),
    Map(Vec<(Value, Value)>),

    // Composites
    /// Fields in declared order.
    Struct(Vec<(String, Value)>),
    Tuple(Vec<Value>),
    Enum(EnumValue),
}

/// The single active variant of an enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Variant tag name.
    pub variant: String,
    /// Wire discriminant of `variant`.
    pub discriminant: u8,
    /// Payload; [`Value::Unit`] for bare tags.
    pub payload: Box<Value>,
}

impl EnumValue {
    /// Create an enum value.
    pub fn new(variant: impl Into<String>, discriminant: u8, payload: Value) -> Self {
        Self {
            variant: variant.into(),
            discriminant,
            payload: Box::new(payload),
        }
    }
}

impl Value {
    /// Build a struct value from `(name, value)` pairs.
    pub fn structure<N: Into<String>>(fields: impl IntoIterator<Item = (N, Value)>) -> Self {
        Self::Struct(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// The zero-arity tuple.
    pub fn empty_tuple() -> Self {
        Self::Tuple(Vec::new())
    }

    /// `Some(value)`.
    pub fn some(value: Value) -> Self {
        Self::Option(Some(Box::new(value)))
    }

    /// `None`.
    pub fn none() -> Self {
        Self::Option(None)
    }

    /// Short label used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::U128(_) => "u128",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::I128(_) => "i128",
            Self::Compact(_) => "compact",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Array(_) => "array",
            Self::Option(_) => "option",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
            Self::Tuple(_) => "tuple",
            Self::Enum(_) => "enum",
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u8.
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Self::U8(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u128 (fixed-width or compact).
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            Self::U128(v) | Self::Compact(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(v) | Self::Array(v) | Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the bytes of a `Vec<u8>` / `[u8; N]` value.
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        self.as_sequence()?.iter().map(Value::as_u8).collect()
    }

    /// Try to get the active variant.
    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get struct field.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Try to get mutable struct field.
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Self::Struct(fields) => fields
                .iter_mut()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Set struct field, appending it if absent.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) -> bool {
        match self {
            Self::Struct(fields) => {
                let name = name.into();
                match fields.iter_mut().find(|(n, _)| *n == name) {
                    Some((_, slot)) => *slot = value,
                    None => fields.push((name, value)),
                }
                true
            }
            _ => false,
        }
    }

    /// Get enum variant name.
    pub fn enum_variant(&self) -> Option<&str> {
        self.as_enum().map(|e| e.variant.as_str())
    }

    /// Get enum payload.
    pub fn enum_payload(&self) -> Option<&Value> {
        self.as_enum().map(|e| e.payload.as_ref())
    }
}

// Conversion traits
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        Self::U128(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Option(v.map(|inner| Box::new(inner.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_values() {
        let v = Value::from(42u32);
        assert_eq!(v.as_u32(), Some(42));
        assert_eq!(v.as_u64(), None);

        let v = Value::from("hello");
        assert_eq!(v.as_str(), Some("hello"));

        assert_eq!(Value::Compact(7).as_u128(), Some(7));
    }

    #[test]
    fn test_struct_value_keeps_order() {
        let mut v = Value::structure([("b", Value::U8(1)), ("a", Value::U8(2))]);
        assert!(v.set_field("b", Value::U8(3)));
        assert!(v.set_field("c", Value::U8(4)));

        let Value::Struct(fields) = &v else {
            panic!("expected struct");
        };
        let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(v.get_field("b").and_then(Value::as_u8), Some(3));
        assert!(v.get_field("z").is_none());
    }

    #[test]
    fn test_set_field_on_non_struct() {
        let mut v = Value::U8(1);
        assert!(!v.set_field("x", Value::Unit));
    }

    #[test]
    fn test_bytes_view() {
        let v = Value::from(vec![1u8, 2, 3]);
        assert_eq!(v.as_bytes(), Some(vec![1, 2, 3]));
        assert_eq!(Value::from(vec![1u32]).as_bytes(), None);
    }

    #[test]
    fn test_enum_value() {
        let v = Value::from(EnumValue::new("Raw", 2, Value::U32(5)));
        assert_eq!(v.enum_variant(), Some("Raw"));
        assert_eq!(v.enum_payload().and_then(Value::as_u32), Some(5));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(1u8)), Value::some(Value::U8(1)));
        assert_eq!(Value::from(None::<u8>), Value::none());
    }

    #[test]
    fn test_json_roundtrip() {
        let v = Value::structure([
            ("id", Value::U32(1)),
            ("tag", Value::from(EnumValue::new("A", 0, Value::Unit))),
        ]);
        let text = serde_json::to_string(&v).expect("serialize");
        let back: Value = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, v);
    }
}
