// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ledger identifiers.
//!
//! Text forms:
//!
//! | Type                | Form                                   |
//! |---------------------|----------------------------------------|
//! | `DomainId`          | `wonderland`                           |
//! | `AccountId`         | `alice@wonderland`                     |
//! | `AssetDefinitionId` | `rose#wonderland`                      |
//! | `AssetId`           | `rose#wonderland#alice@looking_glass`  |
//! |                     | `rose##alice@wonderland` (same domain) |

use crate::convert::{newtype, tagged, FromValue, ToValue};
use crate::paths::*;
use iroha_schema::{SchemaBuilder, SchemaError, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Invalid name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("{0}")]
    Format(&'static str),
}

/// A validated identifier segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, IdError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("empty")
        } else if name.chars().any(char::is_whitespace) {
            Some("contains whitespace")
        } else if name.contains(['@', '#']) {
            Some("contains a reserved character (`@` or `#`)")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(IdError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToValue for Name {
    fn to_value(&self) -> Value {
        Value::Tuple(vec![Value::String(self.0.clone())])
    }
}

impl FromValue for Name {
    fn from_value(value: &Value) -> Option<Self> {
        newtype(value)
            .and_then(Value::as_str)
            .and_then(|s| Self::new(s).ok())
    }
}

/// Declares an id that is a single `name` field.
macro_rules! named_id {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty {
            pub name: Name,
        }

        impl $ty {
            pub fn new(name: Name) -> Self {
                Self { name }
            }
        }

        impl FromStr for $ty {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self::new)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.name.fmt(f)
            }
        }

        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::structure([("name", self.name.to_value())])
            }
        }

        impl FromValue for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                value.get_field("name").and_then(Name::from_value).map(Self::new)
            }
        }
    };
}

named_id!(
    /// Domain identifier.
    DomainId
);
named_id!(
    /// Trigger identifier.
    TriggerId
);
named_id!(
    /// Role identifier.
    RoleId
);

/// `name@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId {
    pub name: Name,
    pub domain_id: DomainId,
}

impl AccountId {
    pub fn new(name: Name, domain_id: DomainId) -> Self {
        Self { name, domain_id }
    }
}

impl FromStr for AccountId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('@') {
            None => Err(IdError::Format(
                "Account ID should have format `name@domain`",
            )),
            Some(("", _)) => Err(IdError::Format("Empty `name` part in `name@domain`")),
            Some((_, "")) => Err(IdError::Format("Empty `domain` part in `name@domain`")),
            Some((name, domain)) => Ok(Self::new(name.parse()?, domain.parse()?)),
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.domain_id)
    }
}

impl ToValue for AccountId {
    fn to_value(&self) -> Value {
        Value::structure([
            ("name", self.name.to_value()),
            ("domain_id", self.domain_id.to_value()),
        ])
    }
}

impl FromValue for AccountId {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self::new(
            Name::from_value(value.get_field("name")?)?,
            DomainId::from_value(value.get_field("domain_id")?)?,
        ))
    }
}

/// `name#domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetDefinitionId {
    pub name: Name,
    pub domain_id: DomainId,
}

impl AssetDefinitionId {
    pub fn new(name: Name, domain_id: DomainId) -> Self {
        Self { name, domain_id }
    }
}

impl FromStr for AssetDefinitionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('#') {
            None => Err(IdError::Format(
                "Asset definition ID should have format `name#domain`",
            )),
            Some(("", _)) => Err(IdError::Format("Empty `name` part in `name#domain`")),
            Some((_, "")) => Err(IdError::Format("Empty `domain` part in `name#domain`")),
            Some((name, domain)) => Ok(Self::new(name.parse()?, domain.parse()?)),
        }
    }
}

impl fmt::Display for AssetDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.domain_id)
    }
}

impl ToValue for AssetDefinitionId {
    fn to_value(&self) -> Value {
        Value::structure([
            ("name", self.name.to_value()),
            ("domain_id", self.domain_id.to_value()),
        ])
    }
}

impl FromValue for AssetDefinitionId {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self::new(
            Name::from_value(value.get_field("name")?)?,
            DomainId::from_value(value.get_field("domain_id")?)?,
        ))
    }
}

/// An asset held by an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId {
    pub definition_id: AssetDefinitionId,
    pub account_id: AccountId,
}

impl AssetId {
    pub fn new(definition_id: AssetDefinitionId, account_id: AccountId) -> Self {
        Self {
            definition_id,
            account_id,
        }
    }
}

impl FromStr for AssetId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((name, account)) = s.split_once("##") {
            let account_id: AccountId = account.parse()?;
            let definition_id = AssetDefinitionId::new(name.parse()?, account_id.domain_id.clone());
            return Ok(Self::new(definition_id, account_id));
        }
        match s.rsplit_once('#') {
            None => Err(IdError::Format(
                "Asset ID should have format `name#domain#account@domain`",
            )),
            Some((_, "")) => Err(IdError::Format("Empty `account` part in asset ID")),
            Some((definition, account)) => Ok(Self::new(definition.parse()?, account.parse()?)),
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.definition_id.domain_id == self.account_id.domain_id {
            write!(f, "{}##{}", self.definition_id.name, self.account_id)
        } else {
            write!(f, "{}#{}", self.definition_id, self.account_id)
        }
    }
}

impl ToValue for AssetId {
    fn to_value(&self) -> Value {
        Value::structure([
            ("definition_id", self.definition_id.to_value()),
            ("account_id", self.account_id.to_value()),
        ])
    }
}

impl FromValue for AssetId {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self::new(
            AssetDefinitionId::from_value(value.get_field("definition_id")?)?,
            AccountId::from_value(value.get_field("account_id")?)?,
        ))
    }
}

/// Any identifier, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdBox {
    DomainId(DomainId),
    AccountId(AccountId),
    AssetDefinitionId(AssetDefinitionId),
    AssetId(AssetId),
    TriggerId(TriggerId),
    RoleId(RoleId),
}

impl ToValue for IdBox {
    fn to_value(&self) -> Value {
        match self {
            Self::DomainId(id) => tagged("DomainId", 0, id.to_value()),
            Self::AccountId(id) => tagged("AccountId", 1, id.to_value()),
            Self::AssetDefinitionId(id) => tagged("AssetDefinitionId", 2, id.to_value()),
            Self::AssetId(id) => tagged("AssetId", 3, id.to_value()),
            Self::TriggerId(id) => tagged("TriggerId", 4, id.to_value()),
            Self::RoleId(id) => tagged("RoleId", 5, id.to_value()),
        }
    }
}

impl FromValue for IdBox {
    fn from_value(value: &Value) -> Option<Self> {
        let e = value.as_enum()?;
        let payload = e.payload.as_ref();
        match e.variant.as_str() {
            "DomainId" => DomainId::from_value(payload).map(Self::DomainId),
            "AccountId" => AccountId::from_value(payload).map(Self::AccountId),
            "AssetDefinitionId" => {
                AssetDefinitionId::from_value(payload).map(Self::AssetDefinitionId)
            }
            "AssetId" => AssetId::from_value(payload).map(Self::AssetId),
            "TriggerId" => TriggerId::from_value(payload).map(Self::TriggerId),
            "RoleId" => RoleId::from_value(payload).map(Self::RoleId),
            _ => None,
        }
    }
}

impl fmt::Display for IdBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainId(id) => id.fmt(f),
            Self::AccountId(id) => id.fmt(f),
            Self::AssetDefinitionId(id) => id.fmt(f),
            Self::AssetId(id) => id.fmt(f),
            Self::TriggerId(id) => id.fmt(f),
            Self::RoleId(id) => id.fmt(f),
        }
    }
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    b.make_tuple(NAME, ["String"])?;
    b.make_struct(DOMAIN_ID, [("name", NAME)])?;
    b.make_struct(ACCOUNT_ID, [("name", NAME), ("domain_id", DOMAIN_ID)])?;
    b.make_struct(
        ASSET_DEFINITION_ID,
        [("name", NAME), ("domain_id", DOMAIN_ID)],
    )?;
    b.make_struct(
        ASSET_ID,
        [
            ("definition_id", ASSET_DEFINITION_ID),
            ("account_id", ACCOUNT_ID),
        ],
    )?;
    b.make_struct(TRIGGER_ID, [("name", NAME)])?;
    b.make_struct(ROLE_ID, [("name", NAME)])?;
    b.make_enum(
        ID_BOX,
        [
            ("DomainId", DOMAIN_ID),
            ("AccountId", ACCOUNT_ID),
            ("AssetDefinitionId", ASSET_DEFINITION_ID),
            ("AssetId", ASSET_ID),
            ("TriggerId", TRIGGER_ID),
            ("RoleId", ROLE_ID),
        ],
    )?;
    Ok(())
}
