// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ledger values: query arguments and query results.
//!
//! `U32` through `Name` carry the ledger's own discriminants (0 to 4). The
//! ledger enum has many more variants; only a handful are kept here and they
//! are numbered on from 5 in declaration order. Those later tags are local
//! to this crate: a peer reads tag 5 onwards differently, so only the first
//! five variants are byte-compatible as query arguments.

use crate::convert::{tagged, FromValue, ToValue};
use crate::crypto::{Hash, PublicKey};
use crate::ids::{IdBox, Name};
use crate::paths::*;
use iroha_schema::{SchemaBuilder, SchemaError, TypeSpec, Value};

/// Key/value metadata attached to ledger objects. Entries keep their
/// insertion order on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub map: Vec<(Name, LedgerValue)>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&LedgerValue> {
        self.map
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Insert or replace `key`.
    pub fn insert(&mut self, key: Name, value: LedgerValue) {
        match self.map.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.map.push((key, value)),
        }
    }
}

impl ToValue for Metadata {
    fn to_value(&self) -> Value {
        let pairs = self
            .map
            .iter()
            .map(|(k, v)| (k.to_value(), v.to_value()))
            .collect();
        Value::structure([("map", Value::Map(pairs))])
    }
}

impl FromValue for Metadata {
    fn from_value(value: &Value) -> Option<Self> {
        let Value::Map(pairs) = value.get_field("map")? else {
            return None;
        };
        let map = pairs
            .iter()
            .map(|(k, v)| Some((Name::from_value(k)?, LedgerValue::from_value(v)?)))
            .collect::<Option<_>>()?;
        Some(Self { map })
    }
}

/// A typed `iroha_data_model.Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerValue {
    U32(u32),
    U128(u128),
    Bool(bool),
    String(String),
    Name(Name),
    Vec(Vec<LedgerValue>),
    LimitedMetadata(Metadata),
    Id(IdBox),
    PublicKey(PublicKey),
    Hash(Hash),
}

impl LedgerValue {
    pub fn as_id(&self) -> Option<&IdBox> {
        match self {
            Self::Id(id) => Some(id),
            _ => None,
        }
    }
}

impl ToValue for LedgerValue {
    fn to_value(&self) -> Value {
        match self {
            Self::U32(v) => tagged("U32", 0, Value::U32(*v)),
            Self::U128(v) => tagged("U128", 1, Value::U128(*v)),
            Self::Bool(v) => tagged("Bool", 2, Value::Bool(*v)),
            Self::String(v) => tagged("String", 3, Value::from(v.as_str())),
            Self::Name(v) => tagged("Name", 4, v.to_value()),
            Self::Vec(v) => tagged("Vec", 5, v.to_value()),
            Self::LimitedMetadata(v) => tagged("LimitedMetadata", 6, v.to_value()),
            Self::Id(v) => tagged("Id", 7, v.to_value()),
            Self::PublicKey(v) => tagged("PublicKey", 8, v.to_value()),
            Self::Hash(v) => tagged("Hash", 9, v.to_value()),
        }
    }
}

impl FromValue for LedgerValue {
    fn from_value(value: &Value) -> Option<Self> {
        let e = value.as_enum()?;
        let payload = e.payload.as_ref();
        match e.variant.as_str() {
            "U32" => payload.as_u32().map(Self::U32),
            "U128" => payload.as_u128().map(Self::U128),
            "Bool" => payload.as_bool().map(Self::Bool),
            "String" => payload.as_str().map(|s| Self::String(s.to_string())),
            "Name" => Name::from_value(payload).map(Self::Name),
            "Vec" => Vec::from_value(payload).map(Self::Vec),
            "LimitedMetadata" => Metadata::from_value(payload).map(Self::LimitedMetadata),
            "Id" => IdBox::from_value(payload).map(Self::Id),
            "PublicKey" => PublicKey::from_value(payload).map(Self::PublicKey),
            "Hash" => Hash::from_value(payload).map(Self::Hash),
            _ => None,
        }
    }
}

impl From<u32> for LedgerValue {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<bool> for LedgerValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<IdBox> for LedgerValue {
    fn from(v: IdBox) -> Self {
        Self::Id(v)
    }
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    let list = b.vec_of(VALUE);
    let map = b.map_of(NAME, VALUE);
    b.make_struct(METADATA, [("map", map)])?;
    b.make_enum(
        VALUE,
        [
            ("U32", TypeSpec::from("u32")),
            ("U128", TypeSpec::from("u128")),
            ("Bool", TypeSpec::from("bool")),
            ("String", TypeSpec::from("String")),
            ("Name", TypeSpec::from(NAME)),
            ("Vec", TypeSpec::from(list)),
            ("LimitedMetadata", TypeSpec::from(METADATA)),
            ("Id", TypeSpec::from(ID_BOX)),
            ("PublicKey", TypeSpec::from(PUBLIC_KEY)),
            ("Hash", TypeSpec::from(HASH)),
        ],
    )?;
    Ok(())
}
