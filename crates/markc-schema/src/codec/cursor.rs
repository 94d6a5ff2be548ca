// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte cursors for codec payloads and record streams.
//!
//! Writers grow a `Vec<u8>` and never fail; readers are bounds-checked and
//! report the offset where the input ran out.

use crate::error::DecodeError;

/// Generate little-endian write methods.
macro_rules! impl_write_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) {
            self.buffer.extend_from_slice(&value.to_le_bytes());
        }
    };
}

/// Generate bounds-checked little-endian read methods.
///
/// Each generated method:
/// 1. Checks that `size_of::<$type>()` bytes remain (else `Truncated`)
/// 2. Converts the bytes via `from_le_bytes()`
/// 3. Advances the offset
macro_rules! impl_read_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self) -> Result<$type, DecodeError> {
            const SIZE: usize = std::mem::size_of::<$type>();
            let mut bytes = [0u8; SIZE];
            bytes.copy_from_slice(self.read_bytes(SIZE)?);
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Append-only writer.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    impl_write_le!(write_u8, u8);
    impl_write_le!(write_i16_le, i16);
    impl_write_le!(write_u16_le, u16);
    impl_write_le!(write_i32_le, i32);
    impl_write_le!(write_u32_le, u32);
    impl_write_le!(write_f32_le, f32);
    impl_write_le!(write_f64_le, f64);

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// `u32` length prefix followed by UTF-8 bytes.
    pub fn write_str(&mut self, value: &str) {
        self.write_u32_le(value.len() as u32);
        self.write_bytes(value.as_bytes());
    }

    pub fn offset(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Bounds-checked reader over a borrowed buffer.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_read_le!(read_u8, u8);
    impl_read_le!(read_i16_le, i16);
    impl_read_le!(read_u16_le, u16);
    impl_read_le!(read_i32_le, i32);
    impl_read_le!(read_u32_le, u32);
    impl_read_le!(read_f32_le, f32);
    impl_read_le!(read_f64_le, f64);

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= self.buffer.len())
            .ok_or(DecodeError::Truncated {
                offset: self.offset,
            })?;
        let slice = &self.buffer[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Read a `u32`-prefixed UTF-8 string, borrowing from the buffer.
    pub fn read_str(&mut self) -> Result<&'a str, DecodeError> {
        let start = self.offset;
        let len = self.read_u32_le()? as usize;
        let bytes = self.read_bytes(len)?;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { offset: start })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }
}
