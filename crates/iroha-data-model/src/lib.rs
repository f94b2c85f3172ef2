// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Query data model for the Iroha 2 ledger.
//!
//! Declares the query request/response types on an
//! [`iroha_schema::SchemaBuilder`] and provides helpers to build signed
//! requests and read paginated results.
//!
//! # Example
//!
//! ```
//! use iroha_data_model::{load_schema, paths, query};
//!
//! let schema = load_schema().unwrap();
//! let no_args: Vec<(&str, iroha_schema::Value)> = Vec::new();
//! let q = query(&schema, "FindAllActiveTriggerIds", no_args).unwrap();
//! let ty = schema.type_id(paths::QUERY_BOX).unwrap();
//! assert_eq!(schema.encode(ty, &q).unwrap(), [31]);
//! ```

pub mod convert;
pub mod crypto;
pub mod error;
pub mod expression;
pub mod ids;
pub mod pagination;
pub mod paths;
pub mod predicate;
pub mod query;
pub mod request;
pub mod signing;
pub mod value;

pub use convert::{FromValue, ToValue};
pub use crypto::{Hash, PublicKey, Signature, SignatureOf};
pub use error::{RequestError, Result};
pub use ids::{
    AccountId, AssetDefinitionId, AssetId, DomainId, IdBox, IdError, Name, RoleId, TriggerId,
};
pub use pagination::{Pagination, Sorting};
pub use predicate::{PredicateBox, StringPredicate, ValuePredicate};
pub use query::{all_queries, find_query, QueryDecl};
pub use request::{
    build_signed_request, decode_query_response, decode_signed_request, encode_query_response,
    encode_signed_request, query, QueryRequest, QueryResponse,
};
pub use signing::{SignError, Signer};
pub use value::{LedgerValue, Metadata};

use iroha_schema::{Schema, SchemaBuilder, SchemaError};

/// Declare every type on `builder` without resolving.
///
/// `QueryBox` goes first so that most of its references start out as
/// forward references.
pub fn declare_all(builder: &mut SchemaBuilder) -> std::result::Result<(), SchemaError> {
    query::declare(builder)?;
    expression::declare(builder)?;
    value::declare(builder)?;
    ids::declare(builder)?;
    predicate::declare(builder)?;
    pagination::declare(builder)?;
    crypto::declare(builder)?;
    Ok(())
}

/// Declare and resolve the full query schema.
pub fn load_schema() -> std::result::Result<Schema, SchemaError> {
    let mut builder = SchemaBuilder::new();
    declare_all(&mut builder)?;
    let schema = builder.resolve_all()?;
    tracing::info!("Query schema loaded with {} types", schema.len());
    Ok(schema)
}
