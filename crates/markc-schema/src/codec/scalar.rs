// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compact tagged encoding for `f64` coordinates.
//!
//! Markup coordinates are overwhelmingly small decimals, so each value is
//! stored in the smallest lossless form:
//!
//! | Tag | Payload | Meaning |
//! |-----|---------|---------|
//! | `0x01` | none | `0.0` |
//! | `0x02` | none | `1.0` |
//! | `0x03` | none | `-1.0` |
//! | `0x04` | `i32` | `n / 1_000_000`, only when that reproduces the value exactly |
//! | `0x05` | `f64` | anything else, bit-for-bit |

use super::cursor::{ByteReader, ByteWriter};
use crate::error::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScalarTag {
    Zero = 0x01,
    One = 0x02,
    MinusOne = 0x03,
    ScaledInteger = 0x04,
    Double = 0x05,
}

impl ScalarTag {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(ScalarTag::Zero),
            0x02 => Some(ScalarTag::One),
            0x03 => Some(ScalarTag::MinusOne),
            0x04 => Some(ScalarTag::ScaledInteger),
            0x05 => Some(ScalarTag::Double),
            _ => None,
        }
    }
}

const SCALE: f64 = 1_000_000.0;

/// Scaled form of `value`, if it survives the round trip exactly.
fn scaled(value: f64) -> Option<i32> {
    let n = (value * SCALE).round();
    if !n.is_finite() || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return None;
    }
    let n = n as i32;
    // Bitwise so -0.0 is not folded into +0.0.
    ((f64::from(n) / SCALE).to_bits() == value.to_bits()).then_some(n)
}

/// Pick the tag `value` will be written with.
pub fn classify(value: f64) -> ScalarTag {
    if value.to_bits() == 0 {
        ScalarTag::Zero
    } else if value == 1.0 {
        ScalarTag::One
    } else if value == -1.0 {
        ScalarTag::MinusOne
    } else if scaled(value).is_some() {
        ScalarTag::ScaledInteger
    } else {
        ScalarTag::Double
    }
}

pub fn write_scalar(out: &mut ByteWriter, value: f64) {
    let tag = classify(value);
    out.write_u8(tag as u8);
    match tag {
        ScalarTag::Zero | ScalarTag::One | ScalarTag::MinusOne => {}
        ScalarTag::ScaledInteger => out.write_i32_le(scaled(value).unwrap_or_default()),
        ScalarTag::Double => out.write_f64_le(value),
    }
}

pub fn read_scalar(input: &mut ByteReader<'_>) -> Result<f64, DecodeError> {
    let offset = input.offset();
    let raw = input.read_u8()?;
    let tag = ScalarTag::from_u8(raw).ok_or(DecodeError::InvalidTag { tag: raw, offset })?;
    Ok(match tag {
        ScalarTag::Zero => 0.0,
        ScalarTag::One => 1.0,
        ScalarTag::MinusOne => -1.0,
        ScalarTag::ScaledInteger => f64::from(input.read_i32_le()?) / SCALE,
        ScalarTag::Double => input.read_f64_le()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_len(value: f64) -> usize {
        let mut out = ByteWriter::new();
        write_scalar(&mut out, value);
        out.offset()
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify(0.0), ScalarTag::Zero);
        assert_eq!(classify(1.0), ScalarTag::One);
        assert_eq!(classify(-1.0), ScalarTag::MinusOne);
        assert_eq!(classify(12.5), ScalarTag::ScaledInteger);
        assert_eq!(classify(-3.25), ScalarTag::ScaledInteger);
        assert_eq!(classify(std::f64::consts::PI), ScalarTag::Double);
        assert_eq!(classify(1e12), ScalarTag::Double);
        assert_eq!(classify(f64::NAN), ScalarTag::Double);
        assert_eq!(classify(-0.0), ScalarTag::Double);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(encoded_len(0.0), 1);
        assert_eq!(encoded_len(100.0), 5);
        assert_eq!(encoded_len(0.1), 5);
        assert_eq!(encoded_len(std::f64::consts::E), 9);
    }

    #[test]
    fn test_values_survive_exactly() {
        let values = [0.0, 1.0, -1.0, 0.1, 2.000001, -1234.5, 1.0 / 3.0, 7e-7, f64::MAX];
        let mut out = ByteWriter::new();
        for value in values {
            write_scalar(&mut out, value);
        }
        let bytes = out.into_bytes();
        let mut input = ByteReader::new(&bytes);
        for value in values {
            let decoded = read_scalar(&mut input).expect("decode");
            assert_eq!(decoded.to_bits(), value.to_bits(), "value {}", value);
        }
        assert!(input.is_eof());
    }

    #[test]
    fn test_invalid_tag() {
        let bytes = [0x09];
        let mut input = ByteReader::new(&bytes);
        assert_eq!(
            read_scalar(&mut input),
            Err(DecodeError::InvalidTag { tag: 0x09, offset: 0 })
        );
    }
}
