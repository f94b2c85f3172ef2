// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Values bound to a schema type.

use crate::codec::CodecError;
use crate::config::CodecConfig;
use crate::schema::{Schema, SchemaError, TypeDescriptor, TypeId};
use crate::value::Value;
use std::fmt;

/// A value together with the schema type it conforms to.
///
/// Unlike a bare [`Value`], an `Instance` is checked on construction and on
/// every field update, so encoding it cannot fail on a shape error.
#[derive(Clone)]
pub struct Instance<'s> {
    schema: &'s Schema,
    ty: TypeId,
    value: Value,
}

impl<'s> Instance<'s> {
    /// Default instance of `ty`.
    pub fn new(schema: &'s Schema, ty: TypeId) -> Result<Self, SchemaError> {
        let value = schema.default_value(ty)?;
        Ok(Self { schema, ty, value })
    }

    /// Wrap an existing value after checking it against `ty`.
    pub fn from_value(schema: &'s Schema, ty: TypeId, value: Value) -> Result<Self, CodecError> {
        schema.validate(ty, &value)?;
        Ok(Self { schema, ty, value })
    }

    /// Decode an instance of `ty`.
    pub fn decode(schema: &'s Schema, ty: TypeId, bytes: &[u8]) -> Result<Self, CodecError> {
        Self::decode_with(schema, ty, bytes, &CodecConfig::default())
    }

    /// Decode an instance of `ty` with explicit limits.
    pub fn decode_with(
        schema: &'s Schema,
        ty: TypeId,
        bytes: &[u8],
        config: &CodecConfig,
    ) -> Result<Self, CodecError> {
        let value = schema.decode_with(ty, bytes, config)?;
        Ok(Self { schema, ty, value })
    }

    /// Type of this instance.
    pub fn type_id(&self) -> TypeId {
        self.ty
    }

    /// Name of this instance's type.
    pub fn type_name(&self) -> &str {
        self.schema.name_of(self.ty).unwrap_or("?")
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Get a struct field by name.
    pub fn get(&self, name: &str) -> Result<&Value, CodecError> {
        self.field_type(name)?;
        self.value.get_field(name).ok_or_else(|| CodecError::MissingField {
            type_name: self.type_name().to_string(),
            field: name.to_string(),
        })
    }

    /// Replace a struct field, checking the new value against the field type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), CodecError> {
        let field_ty = self.field_type(name)?;
        let value = value.into();
        self.schema.validate(field_ty, &value)?;
        match self.value.get_field_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CodecError::MissingField {
                type_name: self.type_name().to_string(),
                field: name.to_string(),
            }),
        }
    }

    /// Encode this instance.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        self.schema.encode(self.ty, &self.value)
    }

    fn descriptor(&self) -> Result<&'s TypeDescriptor<TypeId>, CodecError> {
        self.schema
            .get(self.ty)
            .ok_or(CodecError::UnknownType(self.ty))
    }

    fn field_type(&self, name: &str) -> Result<TypeId, CodecError> {
        let desc = self.descriptor()?;
        if !desc.is_struct() {
            return Err(CodecError::TypeMismatch {
                expected: "struct".into(),
                found: desc.kind.label().into(),
            });
        }
        desc.field(name)
            .map(|f| f.type_ref)
            .ok_or_else(|| CodecError::MissingField {
                type_name: desc.name.clone(),
                field: name.to_string(),
            })
    }
}

impl PartialEq for Instance<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.ty == other.ty && self.value == other.value
    }
}

impl fmt::Debug for Instance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.type_name())
            .field("value", &self.value)
            .finish()
    }
}
