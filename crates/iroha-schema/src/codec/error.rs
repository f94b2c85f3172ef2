// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-message codec errors.

use crate::schema::TypeId;
use thiserror::Error;

/// Errors for encode/decode/validate operations.
///
/// These describe one malformed message; callers report them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("unknown discriminant {discriminant} for `{type_name}`")]
    UnknownVariant { type_name: String, discriminant: u8 },

    #[error("`{type_name}` has no variant `{variant}`")]
    UnknownVariantName { type_name: String, variant: String },

    #[error("variant `{variant}` of `{type_name}` does not have discriminant {discriminant}")]
    VariantMismatch {
        type_name: String,
        variant: String,
        discriminant: u8,
    },

    #[error("`{type_name}` expects {expected} fields, found {found}")]
    FieldCountMismatch {
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("field `{found}` of `{type_name}` is out of order, expected `{expected}`")]
    FieldOrder {
        type_name: String,
        expected: String,
        found: String,
    },

    #[error("missing field `{field}` in `{type_name}`")]
    MissingField { type_name: String, field: String },

    #[error("`{type_name}` expects {expected} elements, found {found}")]
    ArrayLength {
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("unexpected end of input: need {need} bytes, have {have}")]
    UnexpectedEof { need: usize, have: usize },

    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("invalid option tag {0:#04x}")]
    InvalidOptionTag(u8),

    #[error("compact integer is not canonically encoded")]
    NonCanonicalCompact,

    #[error("compact integer does not fit in 128 bits")]
    CompactOverflow,

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("length {len} exceeds limit {max}")]
    LengthLimit { len: u128, max: usize },

    #[error("nesting exceeds depth limit {0}")]
    DepthLimit(usize),

    #[error("type {0} is not part of this schema")]
    UnknownType(TypeId),
}

impl CodecError {
    pub(crate) fn mismatch(expected: impl Into<String>, found: &crate::value::Value) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.kind_name().to_string(),
        }
    }
}
