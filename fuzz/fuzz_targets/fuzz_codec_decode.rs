// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use markc_schema::codec::codecs;

fuzz_target!(|data: &[u8]| {
    for codec in codecs() {
        let _ = codec.decode(data);
    }
});
