// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Account queries.

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::no_args("FindAllAccounts"),
    QueryDecl::new("FindAccountById", &["id"]),
    QueryDecl::new("FindAccountKeyValueByIdAndKey", &["id", "key"]),
    QueryDecl::new("FindAccountsByName", &["name"]),
    QueryDecl::new("FindAccountsByDomainId", &["domain_id"]),
    QueryDecl::new("FindAccountsWithAsset", &["asset_definition_id"]),
];
