// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fully-qualified type names.
//!
//! These are the dotted paths the canonical data model registers its types
//! under; schema declarations and lookups use them verbatim.

// Query root
pub const QUERY_BOX: &str = "iroha_data_model.query.QueryBox";
pub const QUERY_RESULT: &str = "iroha_data_model.query.QueryResult";
pub const PAYLOAD: &str = "iroha_data_model.query.Payload";
pub const SIGNED_QUERY_REQUEST: &str = "iroha_data_model.query.SignedQueryRequest";
pub const PAGINATED_QUERY_RESULT: &str = "iroha_data_model.query.PaginatedQueryResult";
pub const VERSIONED_SIGNED_QUERY_REQUEST: &str =
    "iroha_data_model.query.VersionedSignedQueryRequest";
pub const VERSIONED_PAGINATED_QUERY_RESULT: &str =
    "iroha_data_model.query.VersionedPaginatedQueryResult";

// Values and identifiers
pub const VALUE: &str = "iroha_data_model.Value";
pub const ID_BOX: &str = "iroha_data_model.IdBox";
pub const NAME: &str = "iroha_data_model.name.Name";
pub const DOMAIN_ID: &str = "iroha_data_model.domain.Id";
pub const ACCOUNT_ID: &str = "iroha_data_model.account.Id";
pub const ASSET_DEFINITION_ID: &str = "iroha_data_model.asset.DefinitionId";
pub const ASSET_ID: &str = "iroha_data_model.asset.Id";
pub const TRIGGER_ID: &str = "iroha_data_model.trigger.Id";
pub const ROLE_ID: &str = "iroha_data_model.role.Id";
pub const METADATA: &str = "iroha_data_model.metadata.Metadata";

// Expressions
pub const EXPRESSION: &str = "iroha_data_model.expression.Expression";
pub const EVALUATES_TO: &str = "iroha_data_model.expression.EvaluatesTo";
pub const EXPR_ADD: &str = "iroha_data_model.expression.Add";
pub const EXPR_EQUAL: &str = "iroha_data_model.expression.Equal";
pub const EXPR_NOT: &str = "iroha_data_model.expression.Not";
pub const EXPR_IF: &str = "iroha_data_model.expression.If";

// Filtering and paging
pub const GENERIC_PREDICATE_BOX: &str = "iroha_data_model.predicate.GenericPredicateBox";
pub const VALUE_PREDICATE: &str = "iroha_data_model.predicate.value.Predicate";
pub const STRING_PREDICATE: &str = "iroha_data_model.predicate.string.Predicate";
pub const PAGINATION: &str = "iroha_data_model.pagination.Pagination";
pub const SORTING: &str = "iroha_data_model.sorting.Sorting";

// Crypto
pub const HASH: &str = "iroha_crypto.hash.Hash";
pub const PUBLIC_KEY: &str = "iroha_crypto.PublicKey";
pub const SIGNATURE: &str = "iroha_crypto.signature.Signature";
pub const SIGNATURE_OF: &str = "iroha_crypto.signature.SignatureOf";

/// Path of a query variant type, e.g. `iroha_data_model.query.trigger.FindTriggerById`.
pub fn query_path(module: &str, name: &str) -> String {
    format!("iroha_data_model.query.{}.{}", module, name)
}
