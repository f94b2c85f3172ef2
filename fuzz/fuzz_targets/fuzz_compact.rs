// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use iroha_schema::codec::{decode_compact, encode_compact};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only canonical encodings decode, so decoding then encoding is the identity
    if let Ok((value, used)) = decode_compact(data) {
        let mut bytes = Vec::new();
        encode_compact(value, &mut bytes);
        assert_eq!(bytes, &data[..used]);
    }
});
