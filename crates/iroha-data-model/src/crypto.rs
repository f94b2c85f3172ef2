// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hashes, keys and signatures as they appear in query messages.
//!
//! Only the wire shapes live here; producing signatures is delegated to a
//! [`Signer`](crate::signing::Signer).

use crate::convert::{newtype, FromValue, ToValue};
use crate::paths::*;
use iroha_schema::{SchemaBuilder, SchemaError, TypeSpec, Value};
use std::fmt;

/// Length of a [`Hash`] in bytes.
pub const HASH_LENGTH: usize = 32;

/// Fixed-width content hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; HASH_LENGTH]);

impl Hash {
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl ToValue for Hash {
    fn to_value(&self) -> Value {
        let bytes = self.0.iter().map(|b| Value::U8(*b)).collect();
        Value::Tuple(vec![Value::Array(bytes)])
    }
}

impl FromValue for Hash {
    fn from_value(value: &Value) -> Option<Self> {
        let bytes = newtype(value)?.as_bytes()?;
        bytes.try_into().ok().map(Self)
    }
}

/// Public key with its multihash digest function name, e.g. `ed25519`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    pub digest_function: String,
    pub payload: Vec<u8>,
}

impl PublicKey {
    pub fn new(digest_function: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            digest_function: digest_function.into(),
            payload: payload.into(),
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.digest_function, hex::encode(&self.payload))
    }
}

impl ToValue for PublicKey {
    fn to_value(&self) -> Value {
        Value::structure([
            ("digest_function", Value::from(self.digest_function.as_str())),
            ("payload", Value::from(self.payload.clone())),
        ])
    }
}

impl FromValue for PublicKey {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            digest_function: value.get_field("digest_function")?.as_str()?.to_string(),
            payload: value.get_field("payload")?.as_bytes()?,
        })
    }
}

/// A signature together with the key that verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub public_key: PublicKey,
    pub payload: Vec<u8>,
}

impl ToValue for Signature {
    fn to_value(&self) -> Value {
        Value::structure([
            ("public_key", self.public_key.to_value()),
            ("payload", Value::from(self.payload.clone())),
        ])
    }
}

impl FromValue for Signature {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            public_key: PublicKey::from_value(value.get_field("public_key")?)?,
            payload: value.get_field("payload")?.as_bytes()?,
        })
    }
}

/// Signature over a value of a known type. Same wire form as [`Signature`]
/// wrapped in a one-element tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureOf(pub Signature);

impl ToValue for SignatureOf {
    fn to_value(&self) -> Value {
        Value::Tuple(vec![self.0.to_value()])
    }
}

impl FromValue for SignatureOf {
    fn from_value(value: &Value) -> Option<Self> {
        newtype(value).and_then(Signature::from_value).map(Self)
    }
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    let digest = b.array_of("u8", HASH_LENGTH);
    let bytes = b.vec_of("u8");

    b.make_tuple(HASH, [digest])?;
    b.make_struct(
        PUBLIC_KEY,
        [
            ("digest_function", TypeSpec::from("String")),
            ("payload", TypeSpec::from(&bytes)),
        ],
    )?;
    b.make_struct(
        SIGNATURE,
        [
            ("public_key", TypeSpec::from(PUBLIC_KEY)),
            ("payload", TypeSpec::from(bytes)),
        ],
    )?;
    b.make_tuple(SIGNATURE_OF, [SIGNATURE])?;
    Ok(())
}
