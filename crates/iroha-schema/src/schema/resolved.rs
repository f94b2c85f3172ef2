// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The frozen schema produced by the resolution pass.

use super::defaults::{default_value, TypeTable};
use super::{SchemaError, TypeDescriptor, TypeId};
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;

/// Immutable, fully resolved type table.
///
/// Every reference inside a descriptor is a [`TypeId`] into this table, so
/// encoding and decoding never look names up. A `Schema` is `Send + Sync`
/// and can be shared behind an `Arc` by any number of codec users.
#[derive(Debug, Clone)]
pub struct Schema {
    types: Vec<TypeDescriptor<TypeId>>,
    index: HashMap<String, TypeId>,
}

impl Schema {
    pub(crate) fn from_parts(
        types: Vec<TypeDescriptor<TypeId>>,
        index: HashMap<String, TypeId>,
    ) -> Self {
        Self { types, index }
    }

    /// Id registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.index.get(name).copied()
    }

    /// Id registered under `name`, or [`SchemaError::UnknownType`].
    pub fn type_id(&self, name: &str) -> Result<TypeId, SchemaError> {
        self.lookup(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
    }

    /// Descriptor of a type.
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor<TypeId>> {
        self.types.get(id.0)
    }

    /// Name of a type.
    pub fn name_of(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }

    /// Number of types, primitives included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if the schema holds no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All types in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor<TypeId>)> {
        self.types.iter().enumerate().map(|(i, d)| (TypeId(i), d))
    }

    /// Default instance of a type.
    pub fn default_value(&self, id: TypeId) -> Result<Value, SchemaError> {
        default_value(self, &id)
    }

    /// Name-keyed view with references rendered as type names.
    pub fn dump(&self) -> BTreeMap<String, TypeDescriptor<String>> {
        self.types
            .iter()
            .map(|desc| {
                let named = desc
                    .clone()
                    .try_map_refs(|id| Ok::<_, Infallible>(self.display_name(id)));
                let named = match named {
                    Ok(named) => named,
                    Err(never) => match never {},
                };
                (desc.name.clone(), named)
            })
            .collect()
    }

    fn display_name(&self, id: TypeId) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

impl TypeTable for Schema {
    type Ref = TypeId;

    fn describe(&self, r: &TypeId) -> Result<&TypeDescriptor<TypeId>, SchemaError> {
        self.get(*r)
            .ok_or_else(|| SchemaError::UnknownType(r.to_string()))
    }
}
