// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Flat element/property record streams.
//!
//! The markup front end turns a document into a sequence of [`Record`]s.
//! This module owns the binary form of that sequence (used for deferred
//! template and style bodies) and the dictionary-key scan that runs over it
//! without materializing anything.

use crate::error::SourcePos;
use crate::schema::{KnownElement, KnownProperty};
use std::borrow::Cow;
use std::fmt;

mod key;
mod stream;

pub use key::{extract_key, parse_type_reference, DictionaryKey, KeyExtractor, ScanState};
pub use stream::{RecordReader, RecordTag, RecordWriter, TemplateBodyCodec};

/// Reference to a type in a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef<'a> {
    Known(KnownElement),
    /// Type absent from the schema, by qualified name.
    Named(Cow<'a, str>),
}

impl<'a> TypeRef<'a> {
    /// Canonical reference for a full name: known names become `Known`.
    pub fn from_full_name(full_name: impl Into<Cow<'a, str>>) -> Self {
        let full_name = full_name.into();
        match KnownElement::from_full_name(&full_name) {
            KnownElement::Unknown => TypeRef::Named(full_name),
            known => TypeRef::Known(known),
        }
    }

    /// Schema identifier, `Unknown` for named types.
    pub fn known(&self) -> KnownElement {
        match self {
            TypeRef::Known(element) => *element,
            TypeRef::Named(_) => KnownElement::Unknown,
        }
    }

    pub fn into_owned(self) -> TypeRef<'static> {
        match self {
            TypeRef::Known(element) => TypeRef::Known(element),
            TypeRef::Named(name) => TypeRef::Named(Cow::Owned(name.into_owned())),
        }
    }

    /// True when `self` is `other` or a known subtype of it.
    pub fn is_a(&self, other: &TypeRef<'_>) -> bool {
        match (self, other) {
            (TypeRef::Known(a), TypeRef::Known(b)) => a.is_a(*b),
            (TypeRef::Named(a), TypeRef::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl From<KnownElement> for TypeRef<'_> {
    fn from(element: KnownElement) -> Self {
        TypeRef::Known(element)
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Known(element) => write!(f, "{}", element),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}

/// A member as written in markup: owning type plus member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRef<'a> {
    pub owner: TypeRef<'a>,
    pub name: Cow<'a, str>,
}

impl<'a> MemberRef<'a> {
    pub fn new(owner: impl Into<TypeRef<'a>>, name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Exact schema property for this (owner, name) pair, if any.
    pub fn known(&self) -> KnownProperty {
        match self.owner {
            TypeRef::Known(owner) => KnownProperty::lookup(owner, &self.name),
            TypeRef::Named(_) => KnownProperty::Unknown,
        }
    }

    pub fn into_owned(self) -> MemberRef<'static> {
        MemberRef {
            owner: self.owner.into_owned(),
            name: Cow::Owned(self.name.into_owned()),
        }
    }
}

impl From<KnownProperty> for MemberRef<'_> {
    fn from(property: KnownProperty) -> Self {
        MemberRef::new(property.owner(), property.name())
    }
}

/// One record of a flattened markup document.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    ElementStart(TypeRef<'a>),
    ElementEnd,
    /// Attribute with its raw text value.
    Property {
        member: MemberRef<'a>,
        value: Cow<'a, str>,
    },
    Text(Cow<'a, str>),
    PropertyComplexStart(MemberRef<'a>),
    PropertyComplexEnd,
    PropertyListStart(MemberRef<'a>),
    PropertyListEnd,
    /// Source position of the records that follow.
    LinePosition(SourcePos),
}

impl<'a> Record<'a> {
    pub fn property(member: impl Into<MemberRef<'a>>, value: impl Into<Cow<'a, str>>) -> Self {
        Record::Property {
            member: member.into(),
            value: value.into(),
        }
    }

    pub fn into_owned(self) -> Record<'static> {
        match self {
            Record::ElementStart(ty) => Record::ElementStart(ty.into_owned()),
            Record::ElementEnd => Record::ElementEnd,
            Record::Property { member, value } => Record::Property {
                member: member.into_owned(),
                value: Cow::Owned(value.into_owned()),
            },
            Record::Text(text) => Record::Text(Cow::Owned(text.into_owned())),
            Record::PropertyComplexStart(member) => {
                Record::PropertyComplexStart(member.into_owned())
            }
            Record::PropertyComplexEnd => Record::PropertyComplexEnd,
            Record::PropertyListStart(member) => Record::PropertyListStart(member.into_owned()),
            Record::PropertyListEnd => Record::PropertyListEnd,
            Record::LinePosition(pos) => Record::LinePosition(pos),
        }
    }
}
