// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SCALE decoder driven by a resolved schema.

use super::compact::decode_compact;
use super::CodecError;
use crate::config::CodecConfig;
use crate::schema::{PrimitiveKind, Schema, TypeId, TypeKind};
use crate::value::{EnumValue, Value};

/// Reads values of schema types from a byte slice.
pub(crate) struct Decoder<'s, 'a> {
    schema: &'s Schema,
    config: &'s CodecConfig,
    buffer: &'a [u8],
    offset: usize,
    depth: usize,
}

impl<'s, 'a> Decoder<'s, 'a> {
    pub(crate) fn new(schema: &'s Schema, config: &'s CodecConfig, buffer: &'a [u8]) -> Self {
        Self {
            schema,
            config,
            buffer,
            offset: 0,
            depth: 0,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    /// Check that the whole input was consumed (when configured to).
    pub(crate) fn finish(&self) -> Result<(), CodecError> {
        let left = self.remaining();
        if self.config.reject_trailing_bytes && left > 0 {
            return Err(CodecError::TrailingBytes(left));
        }
        Ok(())
    }

    fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], CodecError> {
        let buffer = self.buffer;
        let slice = self
            .offset
            .checked_add(count)
            .and_then(|end| buffer.get(self.offset..end))
            .ok_or(CodecError::UnexpectedEof {
                need: count,
                have: self.remaining(),
            })?;
        self.offset += count;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_compact(&mut self) -> Result<u128, CodecError> {
        let buffer = self.buffer;
        let (value, used) = decode_compact(&buffer[self.offset.min(buffer.len())..])?;
        self.offset += used;
        Ok(value)
    }

    /// Compact length prefix, bounded by the configured limit.
    fn read_len(&mut self) -> Result<usize, CodecError> {
        let len = self.read_compact()?;
        let max = self.config.max_sequence_len;
        match usize::try_from(len) {
            Ok(n) if n <= max => Ok(n),
            _ => Err(CodecError::LengthLimit { len, max }),
        }
    }

    pub(crate) fn decode_value(&mut self, ty: TypeId) -> Result<Value, CodecError> {
        if self.depth >= self.config.max_depth {
            return Err(CodecError::DepthLimit(self.config.max_depth));
        }
        self.depth += 1;
        let result = self.decode_kind(ty);
        self.depth -= 1;
        result
    }

    fn decode_kind(&mut self, ty: TypeId) -> Result<Value, CodecError> {
        let schema = self.schema;
        let desc = schema.get(ty).ok_or(CodecError::UnknownType(ty))?;
        match &desc.kind {
            TypeKind::Primitive(p) => self.decode_primitive(*p),
            TypeKind::Struct(fields) => {
                let mut values = Vec::with_capacity(fields.len());
                for field in fields {
                    let value = self.decode_value(field.type_ref)?;
                    values.push((field.name.clone(), value));
                }
                Ok(Value::Struct(values))
            }
            TypeKind::Enum(e) => {
                let discriminant = self.read_u8()?;
                let variant = e.variant_by_discriminant(discriminant).ok_or_else(|| {
                    CodecError::UnknownVariant {
                        type_name: desc.name.clone(),
                        discriminant,
                    }
                })?;
                let payload = match variant.payload {
                    Some(payload) => self.decode_value(payload)?,
                    None => Value::Unit,
                };
                Ok(Value::Enum(EnumValue::new(
                    variant.name.clone(),
                    discriminant,
                    payload,
                )))
            }
            TypeKind::Tuple(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.decode_value(*element)?);
                }
                Ok(Value::Tuple(values))
            }
            TypeKind::Sequence(element) => {
                let len = self.read_len()?;
                // Never trust the prefix for the allocation size.
                let mut values = Vec::with_capacity(len.min(self.remaining()));
                for _ in 0..len {
                    values.push(self.decode_value(*element)?);
                }
                Ok(Value::Sequence(values))
            }
            TypeKind::Array { element, length } => {
                let mut values = Vec::with_capacity((*length).min(self.remaining()));
                for _ in 0..*length {
                    values.push(self.decode_value(*element)?);
                }
                Ok(Value::Array(values))
            }
            TypeKind::Option(inner) => {
                let is_bool = matches!(
                    schema.get(*inner).map(|d| &d.kind),
                    Some(TypeKind::Primitive(PrimitiveKind::Bool))
                );
                let tag = self.read_u8()?;
                match (tag, is_bool) {
                    (0, _) => Ok(Value::none()),
                    (1, true) => Ok(Value::some(Value::Bool(true))),
                    (2, true) => Ok(Value::some(Value::Bool(false))),
                    (1, false) => Ok(Value::some(self.decode_value(*inner)?)),
                    (other, _) => Err(CodecError::InvalidOptionTag(other)),
                }
            }
            TypeKind::Map { key, value } => {
                let len = self.read_len()?;
                let mut pairs = Vec::with_capacity(len.min(self.remaining()));
                for _ in 0..len {
                    let k = self.decode_value(*key)?;
                    let v = self.decode_value(*value)?;
                    pairs.push((k, v));
                }
                Ok(Value::Map(pairs))
            }
        }
    }

    fn decode_primitive(&mut self, kind: PrimitiveKind) -> Result<Value, CodecError> {
        Ok(match kind {
            PrimitiveKind::Unit => Value::Unit,
            PrimitiveKind::Bool => match self.read_u8()? {
                0 => Value::Bool(false),
                1 => Value::Bool(true),
                other => return Err(CodecError::InvalidBool(other)),
            },
            PrimitiveKind::U8 => Value::U8(self.read_u8()?),
            PrimitiveKind::U16 => Value::U16(u16::from_le_bytes(self.read_array()?)),
            PrimitiveKind::U32 => Value::U32(u32::from_le_bytes(self.read_array()?)),
            PrimitiveKind::U64 => Value::U64(u64::from_le_bytes(self.read_array()?)),
            PrimitiveKind::U128 => Value::U128(u128::from_le_bytes(self.read_array()?)),
            PrimitiveKind::I8 => Value::I8(i8::from_le_bytes(self.read_array()?)),
            PrimitiveKind::I16 => Value::I16(i16::from_le_bytes(self.read_array()?)),
            PrimitiveKind::I32 => Value::I32(i32::from_le_bytes(self.read_array()?)),
            PrimitiveKind::I64 => Value::I64(i64::from_le_bytes(self.read_array()?)),
            PrimitiveKind::I128 => Value::I128(i128::from_le_bytes(self.read_array()?)),
            PrimitiveKind::Compact => Value::Compact(self.read_compact()?),
            PrimitiveKind::String => {
                let len = self.read_len()?;
                let bytes = self.read_bytes(len)?;
                let text = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
                Value::String(text.to_string())
            }
        })
    }
}
