// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Known-symbol schema: dense identifiers for types and properties.
//!
//! # Wire Contract
//!
//! Identifiers are written as fixed-width `i16`. The stored value is the
//! *negation* of the logical identifier; non-negative values are reserved for
//! stream-local symbols defined inside the compiled stream itself:
//!
//! ```text
//! KnownElement::Button (20)   -> wire -20
//! stream-local type #0        -> wire 0
//! stream-local type #7        -> wire 7
//! ```
//!
//! A compiled stream opens with a [`SchemaStamp`]; readers reject it before
//! trusting any identifier when the version differs from [`SCHEMA_VERSION`].

mod element;
pub(crate) mod macros;
mod module;
mod property;

pub use element::{ns, ElementKind, ElementRow, KnownElement};
pub use module::ModuleKind;
pub use property::{KnownProperty, PropertyRow};

use crate::config::{SCHEMA_VERSION, STREAM_MAGIC};
use crate::error::{DecodeError, SchemaError};
use std::collections::HashSet;

/// A wire identifier: either a schema symbol or a stream-local index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireSymbol<K> {
    Known(K),
    Local(u16),
}

impl KnownElement {
    /// Wire form (negated identifier).
    pub const fn to_wire(self) -> i16 {
        -(self as i16)
    }

    pub fn from_wire(value: i16) -> Result<WireSymbol<KnownElement>, SchemaError> {
        if value >= 0 {
            return Ok(WireSymbol::Local(value as u16));
        }
        match value.checked_neg() {
            Some(id) => KnownElement::from_i16(id).map(WireSymbol::Known),
            None => Err(SchemaError::UnknownWireValue(value)),
        }
    }
}

impl KnownProperty {
    pub const fn to_wire(self) -> i16 {
        -(self as i16)
    }

    pub fn from_wire(value: i16) -> Result<WireSymbol<KnownProperty>, SchemaError> {
        if value >= 0 {
            return Ok(WireSymbol::Local(value as u16));
        }
        match value.checked_neg() {
            Some(id) => KnownProperty::from_i16(id).map(WireSymbol::Known),
            None => Err(SchemaError::UnknownWireValue(value)),
        }
    }
}

/// Stream header carrying the schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStamp {
    pub version: u32,
}

impl SchemaStamp {
    pub const ENCODED_LEN: usize = 8;

    pub const fn current() -> Self {
        Self {
            version: SCHEMA_VERSION,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&STREAM_MAGIC);
        out.extend_from_slice(&self.version.to_le_bytes());
    }

    pub fn read(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < Self::ENCODED_LEN {
            return Err(DecodeError::Truncated { offset: buf.len() });
        }
        if buf[..4] != STREAM_MAGIC {
            return Err(DecodeError::BadMagic);
        }
        let mut version = [0u8; 4];
        version.copy_from_slice(&buf[4..8]);
        Ok(Self {
            version: u32::from_le_bytes(version),
        })
    }

    /// Reject stamps from a different schema version.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.version != SCHEMA_VERSION {
            return Err(SchemaError::VersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

/// Check structural invariants of both tables.
///
/// Returns one message per violation; an empty vector means the schema is
/// well formed. Run from tests so a bad row fails the build.
pub fn verify_tables() -> Vec<String> {
    let mut violations = Vec::new();

    let mut last = 0i16;
    let mut names = HashSet::new();
    let mut full_names = HashSet::new();
    for row in element::ELEMENT_ROWS {
        let id = row.id.as_i16();
        if id <= last {
            violations.push(format!("element {} id {} not ascending", row.name, id));
        }
        last = id;
        if !names.insert(row.name) {
            violations.push(format!("duplicate element name {}", row.name));
        }
        if !full_names.insert(row.full_name()) {
            violations.push(format!("duplicate element full name {}", row.full_name()));
        }
        let rooted = row.base == KnownElement::Unknown;
        if rooted && row.id != KnownElement::Object && row.kind != ElementKind::Interface {
            violations.push(format!("element {} has no base", row.name));
        }
        // Chains must terminate within the table size.
        if row.id.ancestors().take(KnownElement::COUNT + 1).count() > KnownElement::COUNT {
            violations.push(format!("element {} has a cyclic base chain", row.name));
        }
    }
    if i32::from(last) + 1 != i32::from(KnownElement::Max.as_i16()) {
        violations.push(format!("KnownElement::Max does not follow last id {}", last));
    }

    let mut last = 0i16;
    let mut pairs = HashSet::new();
    for row in property::PROPERTY_ROWS {
        let id = row.id.as_i16();
        if id <= last {
            violations.push(format!("property {} id {} not ascending", row.id, id));
        }
        last = id;
        if !pairs.insert((row.owner, row.name)) {
            violations.push(format!("duplicate property {}.{}", row.owner, row.name));
        }
        if !row.owner.is_known() || !row.value_type.is_known() {
            violations.push(format!("property {} references an unknown type", row.name));
        }
    }
    if i32::from(last) + 1 != i32::from(KnownProperty::Max.as_i16()) {
        violations.push(format!("KnownProperty::Max does not follow last id {}", last));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_well_formed() {
        let violations = verify_tables();
        assert!(violations.is_empty(), "schema violations: {:#?}", violations);
    }

    #[test]
    fn test_element_wire_negation() {
        let wire = KnownElement::Button.to_wire();
        assert_eq!(wire, -KnownElement::Button.as_i16());
        assert_eq!(
            KnownElement::from_wire(wire),
            Ok(WireSymbol::Known(KnownElement::Button))
        );
        assert_eq!(KnownElement::from_wire(0), Ok(WireSymbol::Local(0)));
        assert_eq!(KnownElement::from_wire(17), Ok(WireSymbol::Local(17)));
        assert_eq!(
            KnownElement::from_wire(i16::MIN),
            Err(SchemaError::UnknownWireValue(i16::MIN))
        );
        assert!(KnownElement::from_wire(-KnownElement::Max.as_i16()).is_err());
    }

    #[test]
    fn test_property_wire_negation() {
        let wire = KnownProperty::Style_TargetType.to_wire();
        assert!(wire < 0);
        assert_eq!(
            KnownProperty::from_wire(wire),
            Ok(WireSymbol::Known(KnownProperty::Style_TargetType))
        );
    }

    #[test]
    fn test_schema_stamp() {
        let mut buf = Vec::new();
        SchemaStamp::current().write_to(&mut buf);
        assert_eq!(buf.len(), SchemaStamp::ENCODED_LEN);
        let stamp = SchemaStamp::read(&buf).expect("valid stamp");
        assert_eq!(stamp, SchemaStamp::current());
        assert!(stamp.check().is_ok());

        let stale = SchemaStamp {
            version: SCHEMA_VERSION + 1,
        };
        assert_eq!(
            stale.check(),
            Err(SchemaError::VersionMismatch {
                expected: SCHEMA_VERSION,
                found: SCHEMA_VERSION + 1,
            })
        );

        assert_eq!(SchemaStamp::read(b"MKB"), Err(DecodeError::Truncated { offset: 3 }));
        assert_eq!(
            SchemaStamp::read(b"XXXX\x04\x00\x00\x00"),
            Err(DecodeError::BadMagic)
        );
    }
}
