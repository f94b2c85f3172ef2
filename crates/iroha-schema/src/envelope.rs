// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Versioned envelopes.
//!
//! An envelope is an enum whose variants are version labels (`V1`, `V2`, ...)
//! and whose payloads are the message types of those versions. The label
//! number is the wire discriminant, so a `V1` message always starts with
//! byte `0x01` no matter how many versions are declared around it.

use crate::codec::CodecError;
use crate::schema::{EnumDescriptor, Schema, TypeId, TypeKind};
use crate::value::Value;
use thiserror::Error;

/// Envelope wrap/unwrap errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("requested version {requested}, envelope carries {found}")]
    VersionMismatch { requested: String, found: String },

    #[error("`{0}` is not a versioned envelope")]
    NotAnEnvelope(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl Schema {
    fn envelope(&self, ty: TypeId) -> Result<(&str, &EnumDescriptor<TypeId>), EnvelopeError> {
        let desc = self.get(ty).ok_or(CodecError::UnknownType(ty))?;
        match &desc.kind {
            TypeKind::Enum(e) if e.versioned => Ok((desc.name.as_str(), e)),
            _ => Err(EnvelopeError::NotAnEnvelope(desc.name.clone())),
        }
    }

    /// Version labels carried by an envelope, in declaration order.
    pub fn versions(&self, ty: TypeId) -> Result<Vec<&str>, EnvelopeError> {
        let (_, e) = self.envelope(ty)?;
        Ok(e.variants.iter().map(|v| v.name.as_str()).collect())
    }

    /// Wrap `payload` under version `label`.
    pub fn wrap_version(
        &self,
        ty: TypeId,
        label: &str,
        payload: Value,
    ) -> Result<Value, EnvelopeError> {
        let (name, e) = self.envelope(ty)?;
        if e.variant(label).is_none() {
            return Err(EnvelopeError::VersionMismatch {
                requested: label.to_string(),
                found: available(e, name),
            });
        }
        Ok(self.variant(ty, label, payload)?)
    }

    /// Take the payload out of an envelope value, requiring version `label`.
    pub fn unwrap_version(
        &self,
        ty: TypeId,
        envelope: Value,
        label: &str,
    ) -> Result<Value, EnvelopeError> {
        let (name, _) = self.envelope(ty)?;
        let Value::Enum(ev) = envelope else {
            return Err(CodecError::mismatch(name, &envelope).into());
        };
        if ev.variant != label {
            tracing::debug!(
                "Envelope `{}`: requested {}, found {}",
                name,
                label,
                ev.variant
            );
            return Err(EnvelopeError::VersionMismatch {
                requested: label.to_string(),
                found: ev.variant,
            });
        }
        Ok(*ev.payload)
    }

    /// Decode an envelope and unwrap version `label` in one step.
    ///
    /// A leading version byte this envelope does not declare (a newer
    /// protocol version) is reported as a version mismatch rather than an
    /// unknown discriminant.
    pub fn decode_version(
        &self,
        ty: TypeId,
        bytes: &[u8],
        label: &str,
    ) -> Result<Value, EnvelopeError> {
        let (name, e) = self.envelope(ty)?;
        if let Some(&tag) = bytes.first() {
            if e.variant_by_discriminant(tag).is_none() {
                tracing::debug!("Envelope `{}`: undeclared version tag {}", name, tag);
                return Err(EnvelopeError::VersionMismatch {
                    requested: label.to_string(),
                    found: format!("V{}", tag),
                });
            }
        }
        let envelope = self.decode(ty, bytes)?;
        self.unwrap_version(ty, envelope, label)
    }
}

fn available(e: &EnumDescriptor<TypeId>, name: &str) -> String {
    let labels: Vec<&str> = e.variants.iter().map(|v| v.name.as_str()).collect();
    format!("{} of `{}`", labels.join("/"), name)
}
