// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use iroha_data_model::{decode_query_response, load_schema};
use iroha_schema::Schema;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| load_schema().expect("schema"))
}

fuzz_target!(|data: &[u8]| {
    let _ = decode_query_response(schema(), data);
});
