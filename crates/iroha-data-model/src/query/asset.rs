// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Asset and asset definition queries.

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::no_args("FindAllAssets"),
    QueryDecl::no_args("FindAllAssetsDefinitions"),
    QueryDecl::new("FindAssetById", &["id"]),
    QueryDecl::new("FindAssetDefinitionById", &["id"]),
    QueryDecl::new("FindAssetsByName", &["name"]),
    QueryDecl::new("FindAssetsByAccountId", &["account_id"]),
    QueryDecl::new("FindAssetsByAssetDefinitionId", &["asset_definition_id"]),
    QueryDecl::new("FindAssetsByDomainId", &["domain_id"]),
    QueryDecl::new(
        "FindAssetsByDomainIdAndAssetDefinitionId",
        &["domain_id", "asset_definition_id"],
    ),
    QueryDecl::new("FindAssetQuantityById", &["id"]),
    QueryDecl::new("FindTotalAssetQuantityByAssetDefinitionId", &["id"]),
    QueryDecl::new("FindAssetKeyValueByIdAndKey", &["id", "key"]),
    QueryDecl::new("FindAssetDefinitionKeyValueByIdAndKey", &["id", "key"]),
];
