// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transaction queries.

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::no_args("FindAllTransactions"),
    QueryDecl::new("FindTransactionsByAccountId", &["account_id"]),
    QueryDecl::new("FindTransactionByHash", &["hash"]),
];
