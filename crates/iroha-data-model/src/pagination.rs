// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Paging and ordering of query results.

use crate::convert::{FromValue, ToValue};
use crate::ids::Name;
use crate::paths::*;
use iroha_schema::{SchemaBuilder, SchemaError, Value};

/// Window over the result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub start: Option<u32>,
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(start: Option<u32>, limit: Option<u32>) -> Self {
        Self { start, limit }
    }
}

impl ToValue for Pagination {
    fn to_value(&self) -> Value {
        Value::structure([
            ("start", self.start.to_value()),
            ("limit", self.limit.to_value()),
        ])
    }
}

impl FromValue for Pagination {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            start: Option::<u32>::from_value(value.get_field("start")?)?,
            limit: Option::<u32>::from_value(value.get_field("limit")?)?,
        })
    }
}

/// Sort by a metadata key; `None` keeps the ledger order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sorting {
    pub sort_by_metadata_key: Option<Name>,
}

impl ToValue for Sorting {
    fn to_value(&self) -> Value {
        Value::structure([("sort_by_metadata_key", self.sort_by_metadata_key.to_value())])
    }
}

impl FromValue for Sorting {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            sort_by_metadata_key: Option::<Name>::from_value(
                value.get_field("sort_by_metadata_key")?,
            )?,
        })
    }
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    let bound = b.option_of("u32");
    let key = b.option_of(NAME);
    b.make_struct(PAGINATION, [("start", &bound), ("limit", &bound)])?;
    b.make_struct(SORTING, [("sort_by_metadata_key", key)])?;
    Ok(())
}
