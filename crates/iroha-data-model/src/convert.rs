// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Conversions between typed ledger data and schema values.

use iroha_schema::{EnumValue, Value};

/// Typed data that has a schema value form.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Typed data that can be read back from a decoded schema value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl ToValue for u32 {
    fn to_value(&self) -> Value {
        Value::U32(*self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        Value::Option(self.as_ref().map(|v| Box::new(v.to_value())))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(ToValue::to_value).collect())
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_u32()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Option(None) => Some(None),
            Value::Option(Some(inner)) => T::from_value(inner).map(Some),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Sequence(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

/// Enum value with a fixed tag, for types whose layout is declared here.
pub(crate) fn tagged(variant: &str, discriminant: u8, payload: Value) -> Value {
    Value::Enum(EnumValue::new(variant, discriminant, payload))
}

/// Single field of a newtype tuple.
pub(crate) fn newtype(value: &Value) -> Option<&Value> {
    match value {
        Value::Tuple(items) if items.len() == 1 => items.first(),
        _ => None,
    }
}
