// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Role queries.

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::no_args("FindAllRoles"),
    QueryDecl::no_args("FindAllRoleIds"),
    QueryDecl::new("FindRoleByRoleId", &["id"]),
    QueryDecl::new("FindRolesByAccountId", &["id"]),
];
