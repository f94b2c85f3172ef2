// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use iroha_data_model::paths::VERSIONED_SIGNED_QUERY_REQUEST;
use iroha_data_model::{decode_signed_request, load_schema};
use iroha_schema::Schema;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| load_schema().expect("schema"))
}

fuzz_target!(|data: &[u8]| {
    let schema = schema();
    let _ = decode_signed_request(schema, data);

    // Whatever decodes must re-encode to the same bytes
    if let Ok(ty) = schema.type_id(VERSIONED_SIGNED_QUERY_REQUEST) {
        if let Ok(value) = schema.decode(ty, data) {
            let bytes = schema.encode(ty, &value).expect("re-encode");
            assert_eq!(bytes, data);
        }
    }
});
