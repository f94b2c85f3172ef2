// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::new("FindPermissionTokensByAccountId", &["id"]),
    QueryDecl::no_args("FindAllPermissionTokenDefinitions"),
];
