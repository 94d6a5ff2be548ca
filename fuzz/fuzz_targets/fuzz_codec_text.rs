// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use markc_schema::codec::codecs;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for codec in codecs() {
        // Anything encode accepts must decode to what parse produced.
        if let Ok(bytes) = codec.encode(text) {
            let decoded = codec.decode(&bytes).expect("own output decodes");
            let parsed = codec.parse(text).expect("encode accepted it");
            assert!(
                decoded == parsed || format!("{:?}", decoded) == format!("{:?}", parsed),
                "{} round trip diverged for {:?}",
                codec.name(),
                text
            );
        }
    }
});
