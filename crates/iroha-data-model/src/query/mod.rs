// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Query request and response types.
//!
//! `QueryBox` is declared first, while every one of its 39 variant types is
//! still a forward reference; the per-domain query types are declared
//! afterwards and bound by the resolution pass.

mod account;
mod asset;
mod block;
mod domain;
mod peer;
mod permissions;
mod role;
mod transaction;
mod trigger;

use crate::paths::*;
use iroha_schema::{SchemaBuilder, SchemaError, TypeSpec, VariantSpec};

/// One query variant: a zero-arity tuple, or a struct of `EvaluatesTo` fields.
#[derive(Debug, Clone, Copy)]
pub struct QueryDecl {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl QueryDecl {
    const fn new(name: &'static str, fields: &'static [&'static str]) -> Self {
        Self { name, fields }
    }

    const fn no_args(name: &'static str) -> Self {
        Self { name, fields: &[] }
    }

    /// True for the no-argument query idiom.
    pub fn is_no_args(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Query modules in `QueryBox` order.
pub static DOMAINS: [(&str, &[QueryDecl]); 9] = [
    ("account", account::QUERIES),
    ("asset", asset::QUERIES),
    ("domain", domain::QUERIES),
    ("peer", peer::QUERIES),
    ("block", block::QUERIES),
    ("transaction", transaction::QUERIES),
    ("permissions", permissions::QUERIES),
    ("trigger", trigger::QUERIES),
    ("role", role::QUERIES),
];

/// Every query with its module, in `QueryBox` discriminant order.
pub fn all_queries() -> impl Iterator<Item = (&'static str, &'static QueryDecl)> {
    DOMAINS
        .iter()
        .flat_map(|(module, queries)| queries.iter().map(move |q| (*module, q)))
}

/// Find a query by variant name.
pub fn find_query(name: &str) -> Option<(&'static str, &'static QueryDecl)> {
    all_queries().find(|(_, q)| q.name == name)
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    let variants: Vec<VariantSpec> = all_queries()
        .map(|(module, q)| VariantSpec::new(q.name, query_path(module, q.name)))
        .collect();
    b.make_enum(QUERY_BOX, variants)?;

    b.make_struct(
        PAYLOAD,
        [
            ("timestamp_ms", "Compact"),
            ("query", QUERY_BOX),
            ("account_id", ACCOUNT_ID),
            ("filter", GENERIC_PREDICATE_BOX),
        ],
    )?;
    b.make_struct(
        SIGNED_QUERY_REQUEST,
        [("payload", PAYLOAD), ("signature", SIGNATURE_OF)],
    )?;
    b.make_versioned(VERSIONED_SIGNED_QUERY_REQUEST, [("V1", SIGNED_QUERY_REQUEST)])?;

    b.make_tuple(QUERY_RESULT, [VALUE])?;
    b.make_struct(
        PAGINATED_QUERY_RESULT,
        [
            ("result", QUERY_RESULT),
            ("filter", GENERIC_PREDICATE_BOX),
            ("pagination", PAGINATION),
            ("sorting", SORTING),
            ("total", "u64"),
        ],
    )?;
    b.make_versioned(
        VERSIONED_PAGINATED_QUERY_RESULT,
        [("V1", PAGINATED_QUERY_RESULT)],
    )?;

    for (module, query) in all_queries() {
        let path = query_path(module, query.name);
        if query.is_no_args() {
            b.make_tuple(path, Vec::<TypeSpec>::new())?;
        } else {
            b.make_struct(path, query.fields.iter().map(|f| (*f, EVALUATES_TO)))?;
        }
    }
    tracing::debug!("Declared {} query variants", all_queries().count());
    Ok(())
}
