// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Load-time schema errors.
//!
//! Every variant here is a defect in the schema declarations themselves.
//! They stop initialization and are never retried.

use thiserror::Error;

/// Errors raised while declaring or resolving a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("type `{0}` is already registered")]
    DuplicateType(String),

    #[error("unresolved type references: {}", .names.join(", "))]
    Unresolved { names: Vec<String> },

    #[error("type `{0}` is referenced but not yet defined")]
    UnresolvedReference(String),

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("struct `{type_name}` declares field `{field}` twice")]
    DuplicateField { type_name: String, field: String },

    #[error("enum `{type_name}` declares variant `{variant}` twice")]
    DuplicateVariant { type_name: String, variant: String },

    #[error("enum `{type_name}` assigns discriminant {discriminant} to more than one variant")]
    DuplicateDiscriminant { type_name: String, discriminant: u8 },

    #[error("enum `{type_name}` variant `{variant}` discriminant {discriminant} does not fit the one-byte tag")]
    DiscriminantOverflow {
        type_name: String,
        variant: String,
        discriminant: u64,
    },

    #[error("envelope `{type_name}` has invalid version label `{label}` (expected V1..V255)")]
    InvalidVersionLabel { type_name: String, label: String },

    #[error("envelope `{0}` declares no versions")]
    EmptyEnvelope(String),

    #[error("type `{0}` has no variants and cannot be instantiated")]
    Uninhabited(String),

    #[error("type `{0}` nests too deeply to instantiate")]
    RecursionLimit(String),
}

impl SchemaError {
    /// Names of dangling references, if this is an aggregated resolution failure.
    pub fn unresolved_names(&self) -> &[String] {
        match self {
            Self::Unresolved { names } => names,
            _ => &[],
        }
    }
}
