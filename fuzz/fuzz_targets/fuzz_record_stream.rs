// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use markc_schema::{KnownElement, RecordReader, SchemaStamp, TemplateBodyCodec};

fuzz_target!(|data: &[u8]| {
    // Prefix a valid stamp so the fuzzer spends its time on records.
    let mut bytes = Vec::with_capacity(SchemaStamp::ENCODED_LEN + data.len());
    SchemaStamp::current().write_to(&mut bytes);
    bytes.extend_from_slice(data);

    if let Ok(reader) = RecordReader::new(&bytes) {
        for record in reader {
            if record.is_err() {
                break;
            }
        }
    }

    if let Some(codec) = TemplateBodyCodec::for_type(KnownElement::Style) {
        let _ = codec.extract_key(&bytes);
        let _ = codec.decode(data);
    }
});
