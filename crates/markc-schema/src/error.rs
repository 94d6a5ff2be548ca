// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structured error channel shared by every component.
//!
//! All failures surface as [`Error`], which carries a stable [`ErrorCode`] and,
//! where the failing input came from markup, a [`SourcePos`].

use std::fmt;

/// Line/column position inside the markup source (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Stable numeric error codes reported alongside every [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Schema violations (fatal)
    IdentifierOutOfRange = 100,
    IdentifierReserved = 101,
    UnknownWireValue = 102,
    SchemaVersionMismatch = 103,
    TypeNotFound = 104,

    // Conversion failures (recoverable per attribute)
    MalformedCodecInput = 200,

    // Key extraction
    DictionaryKeyNotFound = 300,
    InvalidDataTypeKey = 301,

    // Decode failures (fatal)
    MalformedBinary = 400,

    // Setup
    NotInitialized = 500,
    ModuleMismatch = 501,
    InvalidConfig = 502,
    Io = 503,
}

impl ErrorCode {
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// True for codes that indicate compiler/runtime version skew or a
    /// corrupted stream; these are never retried.
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorCode::IdentifierOutOfRange
                | ErrorCode::IdentifierReserved
                | ErrorCode::UnknownWireValue
                | ErrorCode::SchemaVersionMismatch
                | ErrorCode::TypeNotFound
                | ErrorCode::MalformedBinary
        )
    }
}

/// Identifier-level schema violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("type identifier {0} is outside the known range")]
    ElementOutOfRange(i32),
    #[error("property identifier {0} is outside the known range")]
    PropertyOutOfRange(i32),
    #[error("identifier {0} is reserved and has no registry entry")]
    Reserved(i32),
    #[error("wire value {0} does not name a known or stream-local symbol")]
    UnknownWireValue(i16),
    #[error("schema version mismatch: stream has {found}, registry is {expected}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("module '{module}' does not define '{full_name}'")]
    TypeNotFound { module: String, full_name: String },
}

/// Malformed bytes handed to a decoder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected end of buffer at offset {offset}")]
    Truncated { offset: usize },
    #[error("invalid tag 0x{tag:02x} at offset {offset}")]
    InvalidTag { tag: u8, offset: usize },
    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("bad stream header")]
    BadMagic,
    #[error("{reason} at offset {offset}")]
    Invalid { offset: usize, reason: String },
}

/// One-time host initialization failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("host modules have not been initialized")]
    NotInitialized,
    #[error("expected module '{expected}' but host supplied '{found}'")]
    ModuleMismatch { expected: String, found: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("cannot convert {codec} input at offset {offset}: {reason}")]
    Conversion {
        codec: &'static str,
        offset: usize,
        reason: String,
    },

    #[error("no dictionary key found{}: {reason}", fmt_pos(.position))]
    KeyNotFound {
        reason: String,
        position: Option<SourcePos>,
    },

    #[error("'{name}' cannot be used as a data template key{}", fmt_pos(.position))]
    InvalidDataType {
        name: String,
        position: Option<SourcePos>,
    },

    #[error("malformed binary: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Init(#[from] InitError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_pos(position: &Option<SourcePos>) -> String {
    match position {
        Some(pos) => format!(" at {}", pos),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn conversion(codec: &'static str, offset: usize, reason: impl Into<String>) -> Self {
        Error::Conversion {
            codec,
            offset,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Schema(err) => match err {
                SchemaError::ElementOutOfRange(_) | SchemaError::PropertyOutOfRange(_) => {
                    ErrorCode::IdentifierOutOfRange
                }
                SchemaError::Reserved(_) => ErrorCode::IdentifierReserved,
                SchemaError::UnknownWireValue(_) => ErrorCode::UnknownWireValue,
                SchemaError::VersionMismatch { .. } => ErrorCode::SchemaVersionMismatch,
                SchemaError::TypeNotFound { .. } => ErrorCode::TypeNotFound,
            },
            Error::Conversion { .. } => ErrorCode::MalformedCodecInput,
            Error::KeyNotFound { .. } => ErrorCode::DictionaryKeyNotFound,
            Error::InvalidDataType { .. } => ErrorCode::InvalidDataTypeKey,
            Error::Decode(_) => ErrorCode::MalformedBinary,
            Error::Init(InitError::NotInitialized) => ErrorCode::NotInitialized,
            Error::Init(InitError::ModuleMismatch { .. }) => ErrorCode::ModuleMismatch,
            Error::Config(_) => ErrorCode::InvalidConfig,
            Error::Io(_) => ErrorCode::Io,
        }
    }

    /// Source position of the markup that triggered the error, when known.
    pub fn position(&self) -> Option<SourcePos> {
        match self {
            Error::KeyNotFound { position, .. } | Error::InvalidDataType { position, .. } => {
                *position
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err: Error = SchemaError::ElementOutOfRange(9000).into();
        assert_eq!(err.code(), ErrorCode::IdentifierOutOfRange);
        assert!(err.code().is_fatal());

        let err = Error::conversion("PointCollection", 3, "expected number");
        assert_eq!(err.code(), ErrorCode::MalformedCodecInput);
        assert!(!err.code().is_fatal());
        assert_eq!(
            err.to_string(),
            "cannot convert PointCollection input at offset 3: expected number"
        );
    }

    #[test]
    fn test_key_error_carries_position() {
        let err = Error::KeyNotFound {
            reason: "template body started".into(),
            position: Some(SourcePos::new(12, 7)),
        };
        assert_eq!(err.position(), Some(SourcePos::new(12, 7)));
        assert_eq!(
            err.to_string(),
            "no dictionary key found at line 12, column 7: template body started"
        );

        let err = Error::KeyNotFound {
            reason: "empty".into(),
            position: None,
        };
        assert_eq!(err.to_string(), "no dictionary key found: empty");
    }

    #[test]
    fn test_decode_error_is_fatal() {
        let err: Error = DecodeError::Truncated { offset: 4 }.into();
        assert_eq!(err.code(), ErrorCode::MalformedBinary);
        assert!(err.code().is_fatal());
        assert_eq!(err.code().as_u16(), 400);
    }
}
