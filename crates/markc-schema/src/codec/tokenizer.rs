// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Number tokenizer shared by the text forms of structured values.
//!
//! Tokens are separated by whitespace, a single comma, or both
//! (`"1,2 3,4"`, `"1, 2, 3"`). An empty token between two commas, or a
//! trailing comma, is malformed.

use crate::error::{Error, Result};

/// Forward-only tokenizer over attribute text.
#[derive(Debug, Clone)]
pub struct NumberTokenizer<'a> {
    codec: &'static str,
    text: &'a str,
    pos: usize,
}

impl<'a> NumberTokenizer<'a> {
    pub fn new(codec: &'static str, text: &'a str) -> Self {
        let mut tokenizer = Self {
            codec,
            text,
            pos: 0,
        };
        tokenizer.skip_whitespace();
        tokenizer
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn error(&self, offset: usize, reason: impl Into<String>) -> Error {
        Error::conversion(self.codec, offset, reason)
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume whitespace and at most one comma after a token.
    fn skip_separator(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.text[self.pos..].starts_with(',') {
            let comma = self.pos;
            self.pos += 1;
            self.skip_whitespace();
            if self.is_done() {
                return Err(self.error(comma, "trailing separator"));
            }
            if self.text[self.pos..].starts_with(',') {
                return Err(self.error(self.pos, "empty token"));
            }
        }
        Ok(())
    }

    /// Next raw token, without the separator.
    pub fn next_token(&mut self) -> Result<Option<(usize, &'a str)>> {
        if self.is_done() {
            return Ok(None);
        }
        let start = self.pos;
        let rest = &self.text[start..];
        let len = rest
            .find(|c: char| c == ',' || c.is_whitespace())
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error(start, "empty token"));
        }
        self.pos += len;
        self.skip_separator()?;
        Ok(Some((start, &rest[..len])))
    }

    pub fn next_f64(&mut self) -> Result<Option<f64>> {
        match self.next_token()? {
            None => Ok(None),
            Some((offset, token)) => parse_f64(token)
                .map(Some)
                .ok_or_else(|| self.error(offset, format!("'{}' is not a number", token))),
        }
    }

    /// Next number; end of input is an error.
    pub fn expect_f64(&mut self) -> Result<f64> {
        let offset = self.pos;
        self.next_f64()?
            .ok_or_else(|| self.error(offset, "expected a number"))
    }

    pub fn next_i32(&mut self) -> Result<Option<i32>> {
        match self.next_token()? {
            None => Ok(None),
            Some((offset, token)) => token
                .parse::<i32>()
                .map(Some)
                .map_err(|_| self.error(offset, format!("'{}' is not an integer", token))),
        }
    }

    /// Read all remaining numbers in groups of `arity`.
    pub fn tuples<const N: usize>(mut self) -> Result<Vec<[f64; N]>> {
        let mut out = Vec::new();
        loop {
            let offset = self.pos;
            let Some(first) = self.next_f64()? else {
                break;
            };
            let mut tuple = [first; N];
            for slot in tuple.iter_mut().skip(1) {
                *slot = self.next_f64()?.ok_or_else(|| {
                    self.error(offset, format!("incomplete {}-component value", N))
                })?;
            }
            out.push(tuple);
        }
        Ok(out)
    }
}

/// Parse a markup number: decimal, exponent, `Infinity`, `-Infinity`, `NaN`.
pub fn parse_f64(token: &str) -> Option<f64> {
    match token {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        // Rust also accepts "inf"/"nan" spellings; markup does not.
        _ if token.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => None,
        _ => token.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(text: &str) -> Result<Vec<f64>> {
        let mut tokenizer = NumberTokenizer::new("Test", text);
        let mut out = Vec::new();
        while let Some(value) = tokenizer.next_f64()? {
            out.push(value);
        }
        Ok(out)
    }

    #[test]
    fn test_separators() {
        assert_eq!(numbers("1,2 3,4").expect("valid"), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(numbers("  1 ,  2\t3\n4 ").expect("valid"), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(numbers("").expect("valid"), Vec::<f64>::new());
        assert_eq!(numbers("   ").expect("valid"), Vec::<f64>::new());
    }

    #[test]
    fn test_malformed() {
        let err = numbers("1,,2").expect_err("empty token");
        assert!(matches!(err, Error::Conversion { offset: 2, .. }));
        let err = numbers("1,2,").expect_err("trailing comma");
        assert!(matches!(err, Error::Conversion { offset: 3, .. }));
        let err = numbers("1 x 3").expect_err("bad number");
        assert!(matches!(err, Error::Conversion { offset: 2, .. }));
        assert!(numbers(",1").is_err());
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_f64("-1.5e3"), Some(-1500.0));
        assert_eq!(parse_f64(".5"), Some(0.5));
        assert_eq!(parse_f64("Infinity"), Some(f64::INFINITY));
        assert!(parse_f64("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("1px"), None);
    }

    #[test]
    fn test_tuples() {
        let pairs = NumberTokenizer::new("Test", "0,0 10,5.5")
            .tuples::<2>()
            .expect("valid");
        assert_eq!(pairs, vec![[0.0, 0.0], [10.0, 5.5]]);

        let err = NumberTokenizer::new("Test", "1 2 3")
            .tuples::<2>()
            .expect_err("odd count");
        assert!(matches!(err, Error::Conversion { offset: 4, .. }));
    }
}
