// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Trigger queries.

use super::QueryDecl;

pub(super) const QUERIES: &[QueryDecl] = &[
    QueryDecl::no_args("FindAllActiveTriggerIds"),
    QueryDecl::new("FindTriggerById", &["id"]),
    QueryDecl::new("FindTriggerKeyValueByIdAndKey", &["id", "key"]),
    QueryDecl::new("FindTriggersByDomainId", &["domain_id"]),
];
