// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Block and block header queries.

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::no_args("FindAllBlocks"),
    QueryDecl::no_args("FindAllBlockHeaders"),
    QueryDecl::new("FindBlockHeaderByHash", &["hash"]),
];
