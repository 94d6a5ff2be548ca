// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `Int32Collection` codec.
//!
//! Wire form: `u32` count; when the count is non-zero a width tag follows,
//! then the payload for that width. Index lists in markup are mostly small
//! non-negative numbers or plain `0 1 2 3 ...` runs, so both get a short form.

use super::cursor::{ByteReader, ByteWriter};
use super::tokenizer::NumberTokenizer;
use super::value::CodecValue;
use super::StructuredCodec;
use crate::error::{DecodeError, Error, Result};
use crate::schema::KnownElement;

/// Upper bound on a decoded `Consecutive` run; the wire form is four bytes
/// regardless of length.
pub const MAX_CONSECUTIVE_RUN: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IntWidth {
    /// `start: i32`; values are `start, start + 1, ...`.
    Consecutive = 0,
    Byte = 1,
    UShort = 2,
    Integer = 3,
}

impl IntWidth {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(IntWidth::Consecutive),
            1 => Some(IntWidth::Byte),
            2 => Some(IntWidth::UShort),
            3 => Some(IntWidth::Integer),
            _ => None,
        }
    }

    /// Payload size in bytes for `count` values.
    fn payload_len(self, count: usize) -> usize {
        match self {
            IntWidth::Consecutive => 4,
            IntWidth::Byte => count,
            IntWidth::UShort => count * 2,
            IntWidth::Integer => count * 4,
        }
    }

    /// Smallest width that represents `values` exactly and decodes back.
    pub fn choose(values: &[i32]) -> Self {
        let consecutive = values.len() <= MAX_CONSECUTIVE_RUN
            && values
                .windows(2)
                .all(|w| w[0].checked_add(1) == Some(w[1]));
        let fixed = if values.iter().all(|v| (0..=i32::from(u8::MAX)).contains(v)) {
            IntWidth::Byte
        } else if values.iter().all(|v| (0..=i32::from(u16::MAX)).contains(v)) {
            IntWidth::UShort
        } else {
            IntWidth::Integer
        };
        if consecutive
            && IntWidth::Consecutive.payload_len(values.len()) < fixed.payload_len(values.len())
        {
            IntWidth::Consecutive
        } else {
            fixed
        }
    }
}

#[derive(Debug, Default)]
pub struct Int32CollectionCodec;

impl Int32CollectionCodec {
    pub const NAME: &'static str = "Int32Collection";
}

impl StructuredCodec for Int32CollectionCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value_type(&self) -> KnownElement {
        KnownElement::Int32Collection
    }

    fn parse(&self, text: &str) -> Result<CodecValue> {
        let mut tokenizer = NumberTokenizer::new(Self::NAME, text);
        let mut values = Vec::new();
        while let Some(value) = tokenizer.next_i32()? {
            values.push(value);
        }
        Ok(CodecValue::Int32s(values))
    }

    fn write(&self, value: &CodecValue, out: &mut ByteWriter) -> Result<()> {
        let CodecValue::Int32s(values) = value else {
            return Err(Error::conversion(Self::NAME, 0, "value of another codec"));
        };
        out.write_u32_le(values.len() as u32);
        if values.is_empty() {
            return Ok(());
        }
        let width = IntWidth::choose(values);
        out.write_u8(width as u8);
        match width {
            IntWidth::Consecutive => out.write_i32_le(values[0]),
            // `choose` guarantees the narrowing casts are lossless.
            IntWidth::Byte => values.iter().for_each(|v| out.write_u8(*v as u8)),
            IntWidth::UShort => values.iter().for_each(|v| out.write_u16_le(*v as u16)),
            IntWidth::Integer => values.iter().for_each(|v| out.write_i32_le(*v)),
        }
        Ok(())
    }

    fn read(&self, input: &mut ByteReader<'_>) -> std::result::Result<CodecValue, DecodeError> {
        let count = input.read_u32_le()? as usize;
        if count == 0 {
            return Ok(CodecValue::Int32s(Vec::new()));
        }
        let offset = input.offset();
        let raw = input.read_u8()?;
        let width = IntWidth::from_u8(raw).ok_or(DecodeError::InvalidTag { tag: raw, offset })?;
        if width.payload_len(count) > input.remaining() {
            return Err(DecodeError::Truncated {
                offset: input.offset(),
            });
        }
        let values = match width {
            IntWidth::Consecutive => {
                let start = input.read_i32_le()?;
                if count > MAX_CONSECUTIVE_RUN {
                    return Err(DecodeError::Invalid {
                        offset,
                        reason: format!("consecutive run of {} values", count),
                    });
                }
                let last = i64::from(start) + count as i64 - 1;
                if last > i64::from(i32::MAX) {
                    return Err(DecodeError::Invalid {
                        offset,
                        reason: format!("run of {} from {} overflows i32", count, start),
                    });
                }
                (0..count as i32).map(|i| start + i).collect()
            }
            IntWidth::Byte => (0..count)
                .map(|_| input.read_u8().map(i32::from))
                .collect::<std::result::Result<_, _>>()?,
            IntWidth::UShort => (0..count)
                .map(|_| input.read_u16_le().map(i32::from))
                .collect::<std::result::Result<_, _>>()?,
            IntWidth::Integer => (0..count)
                .map(|_| input.read_i32_le())
                .collect::<std::result::Result<_, _>>()?,
        };
        Ok(CodecValue::Int32s(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn width_byte(text: &str) -> Option<u8> {
        Int32CollectionCodec.encode(text).expect("encode").get(4).copied()
    }

    #[test]
    fn test_width_selection() {
        assert_eq!(IntWidth::choose(&[0, 1, 2, 3, 4, 5]), IntWidth::Consecutive);
        assert_eq!(IntWidth::choose(&[3, 4]), IntWidth::Byte);
        assert_eq!(IntWidth::choose(&[0, 2, 1, 255]), IntWidth::Byte);
        assert_eq!(IntWidth::choose(&[0, 256]), IntWidth::UShort);
        assert_eq!(IntWidth::choose(&[1, -1]), IntWidth::Integer);
        assert_eq!(IntWidth::choose(&[70_000, 70_002]), IntWidth::Integer);
        assert_eq!(IntWidth::choose(&[70_000, 70_001, 70_002]), IntWidth::Consecutive);
        assert_eq!(IntWidth::choose(&[-7]), IntWidth::Integer);
    }

    #[test]
    fn test_overlong_run_uses_fixed_width() {
        let run: Vec<i32> = (0..=MAX_CONSECUTIVE_RUN as i32).collect();
        assert_eq!(IntWidth::choose(&run), IntWidth::Integer);
        assert_eq!(
            IntWidth::choose(&run[..MAX_CONSECUTIVE_RUN]),
            IntWidth::Consecutive
        );

        let value = CodecValue::Int32s(run);
        let mut out = ByteWriter::new();
        Int32CollectionCodec.write(&value, &mut out).expect("write");
        assert_eq!(out.as_slice()[4], IntWidth::Integer as u8);
        assert_eq!(Int32CollectionCodec.decode(out.as_slice()).expect("decode"), value);
    }

    #[test]
    fn test_round_trip_each_width() {
        for (text, width) in [
            ("0 1 2 3 4 5 6 7", IntWidth::Consecutive as u8),
            ("0,2,1 3,2,1", IntWidth::Byte as u8),
            ("1000 2 65535", IntWidth::UShort as u8),
            ("-5 2147483647 -2147483648", IntWidth::Integer as u8),
        ] {
            assert_eq!(width_byte(text), Some(width), "{}", text);
            let bytes = Int32CollectionCodec.encode(text).expect("encode");
            assert_eq!(
                Int32CollectionCodec.decode(&bytes).expect("decode"),
                Int32CollectionCodec.parse(text).expect("parse"),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_empty_writes_count_only() {
        let bytes = Int32CollectionCodec.encode("  ").expect("encode");
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert!(Int32CollectionCodec.decode(&bytes).expect("decode").is_empty());
    }

    #[test]
    fn test_rejects_non_integers() {
        let err = Int32CollectionCodec.encode("1 2.5").expect_err("fraction");
        assert_eq!(err.code(), ErrorCode::MalformedCodecInput);
        assert!(Int32CollectionCodec.encode("1 99999999999").is_err());
    }

    #[test]
    fn test_decode_errors() {
        let err = Int32CollectionCodec
            .decode(&[2, 0, 0, 0, 9, 1, 2])
            .expect_err("bad width");
        assert_eq!(err.code(), ErrorCode::MalformedBinary);
        assert!(Int32CollectionCodec.decode(&[3, 0, 0, 0, 1, 1]).is_err());
        // Run that would pass i32::MAX.
        let mut out = ByteWriter::new();
        out.write_u32_le(3);
        out.write_u8(IntWidth::Consecutive as u8);
        out.write_i32_le(i32::MAX);
        assert!(Int32CollectionCodec.decode(out.as_slice()).is_err());
    }
}
