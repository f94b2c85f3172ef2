// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SCALE wire codec.
//!
//! Encoding and decoding are driven by a resolved [`Schema`]: every type
//! reference is already a [`TypeId`], so the hot path never looks a name up.
//!
//! | Kind            | Wire form                                   |
//! |-----------------|---------------------------------------------|
//! | integers        | little endian, fixed width                  |
//! | `bool`          | one byte, `0` or `1`                        |
//! | `Compact`       | SCALE compact integer                       |
//! | `String`, `Vec` | compact length, then contents               |
//! | `Map`           | compact count, then key/value pairs         |
//! | `Option<T>`     | `0`, or `1` + payload (`Option<bool>`: 0/1/2)|
//! | struct, tuple   | members in declared order, no prefix        |
//! | array           | elements, no prefix                         |
//! | enum            | one-byte discriminant, then payload         |
//!
//! The encoder takes a value only in the shape the decoder produces for its
//! type: `Sequence` for `Vec`, `Array` for arrays, `Compact` for compact
//! integers, struct fields in declared order, an empty `Tuple` for a
//! zero-arity tuple. Nesting and lengths are bounded by the default
//! [`CodecConfig`], so every encoded value decodes back to itself.

mod compact;
mod decoder;
mod encoder;
mod error;

pub use compact::{compact_len, decode_compact, encode_compact};
pub use error::CodecError;

use crate::config::CodecConfig;
use crate::schema::{Schema, TypeId, TypeKind};
use crate::value::{EnumValue, Value};
use decoder::Decoder;
use encoder::Encoder;

/// Encode `value` as an instance of `ty`.
pub fn encode(schema: &Schema, ty: TypeId, value: &Value) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode_to(schema, ty, value, &mut out)?;
    Ok(out)
}

/// Append the encoding of `value` to `out`.
///
/// On error `out` is left as it was before the call.
pub fn encode_to(
    schema: &Schema,
    ty: TypeId,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let start = out.len();
    let mut encoder = Encoder::new(schema, std::mem::take(out));
    let result = encoder.encode_value(ty, value);
    *out = encoder.into_bytes();
    if result.is_err() {
        out.truncate(start);
    }
    result
}

/// Decode one instance of `ty` with the default limits.
pub fn decode(schema: &Schema, ty: TypeId, bytes: &[u8]) -> Result<Value, CodecError> {
    decode_with(schema, ty, bytes, &CodecConfig::default())
}

/// Decode one instance of `ty`.
pub fn decode_with(
    schema: &Schema,
    ty: TypeId,
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<Value, CodecError> {
    let mut decoder = Decoder::new(schema, config, bytes);
    let result = decoder
        .decode_value(ty)
        .and_then(|value| decoder.finish().map(|()| value));
    if let Err(e) = &result {
        tracing::debug!(
            "Decode of {} failed ({} bytes): {}",
            schema.name_of(ty).unwrap_or("?"),
            bytes.len(),
            e
        );
    }
    result
}

impl Schema {
    /// Encode `value` as an instance of `ty`.
    pub fn encode(&self, ty: TypeId, value: &Value) -> Result<Vec<u8>, CodecError> {
        encode(self, ty, value)
    }

    /// Decode one instance of `ty` with the default limits.
    pub fn decode(&self, ty: TypeId, bytes: &[u8]) -> Result<Value, CodecError> {
        decode(self, ty, bytes)
    }

    /// Decode one instance of `ty` with explicit limits.
    pub fn decode_with(
        &self,
        ty: TypeId,
        bytes: &[u8],
        config: &CodecConfig,
    ) -> Result<Value, CodecError> {
        decode_with(self, ty, bytes, config)
    }

    /// Check that `value` conforms to `ty`.
    ///
    /// Accepts exactly the values [`Schema::encode`] accepts.
    pub fn validate(&self, ty: TypeId, value: &Value) -> Result<(), CodecError> {
        let mut encoder = Encoder::new(self, Vec::new());
        encoder.encode_value(ty, value)
    }

    /// Build an enum value, taking the discriminant from the schema so the
    /// tag and discriminant cannot disagree.
    pub fn variant(&self, ty: TypeId, tag: &str, payload: Value) -> Result<Value, CodecError> {
        let desc = self.get(ty).ok_or(CodecError::UnknownType(ty))?;
        let TypeKind::Enum(e) = &desc.kind else {
            return Err(CodecError::TypeMismatch {
                expected: "enum".into(),
                found: desc.kind.label().into(),
            });
        };
        let variant = e.variant(tag).ok_or_else(|| CodecError::UnknownVariantName {
            type_name: desc.name.clone(),
            variant: tag.to_string(),
        })?;
        let value = Value::Enum(EnumValue::new(
            variant.name.clone(),
            variant.discriminant,
            payload,
        ));
        self.validate(ty, &value)?;
        Ok(value)
    }
}
