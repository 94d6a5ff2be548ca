// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Implicit dictionary keys for templates and styles.
//!
//! A style or template placed in a resource dictionary without an explicit
//! key is keyed by its `TargetType`, or for data templates by a data-shape
//! key wrapping `DataType`. The key must be found on the outermost element
//! before its body begins:
//!
//! ```text
//! ScanningOutermost --ElementStart--> LookingForKeyAttribute
//! LookingForKeyAttribute --Property(TargetType|DataType)--> Found
//! LookingForKeyAttribute --ElementStart|ElementEnd|Text|ComplexStart|ListStart--> NotFound
//! ```

use super::{Record, TypeRef};
use crate::error::{Error, Result, SourcePos};
use crate::schema::{ElementKind, KnownElement};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Member naming the key of a style or control template.
pub const TARGET_TYPE_MEMBER: &str = "TargetType";
/// Member naming the data shape of a data template.
pub const DATA_TYPE_MEMBER: &str = "DataType";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictionaryKey<'a> {
    /// Keyed by target type.
    Type(TypeRef<'a>),
    /// Data-shape key wrapping the template's data type.
    DataTemplate(TypeRef<'a>),
}

impl DictionaryKey<'_> {
    pub fn type_ref(&self) -> &TypeRef<'_> {
        match self {
            DictionaryKey::Type(ty) | DictionaryKey::DataTemplate(ty) => ty,
        }
    }

    pub fn into_owned(self) -> DictionaryKey<'static> {
        match self {
            DictionaryKey::Type(ty) => DictionaryKey::Type(ty.into_owned()),
            DictionaryKey::DataTemplate(ty) => DictionaryKey::DataTemplate(ty.into_owned()),
        }
    }
}

impl fmt::Display for DictionaryKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryKey::Type(ty) => write!(f, "{}", ty),
            DictionaryKey::DataTemplate(ty) => write!(f, "DataTemplateKey({})", ty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    ScanningOutermost,
    LookingForKeyAttribute,
    Found,
    NotFound,
}

/// Byte range of the type name inside a `TargetType`/`DataType` value.
///
/// Accepts `{x:Type Name}`, `{x:Type TypeName=Name}`, the long
/// `{x:TypeExtension Name}` spelling, `prefix:Name` and bare `Name`.
/// Returns `None` when no name is present.
pub fn parse_type_reference(value: &str) -> Option<Range<usize>> {
    let offset_of = |inner: &str| inner.as_ptr() as usize - value.as_ptr() as usize;
    let trimmed = value.trim();
    let name = match trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(inner) => {
            let inner = inner.trim_start();
            let rest = ["x:TypeExtension", "TypeExtension", "x:Type", "Type"]
                .into_iter()
                .find_map(|markup| inner.strip_prefix(markup))?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let rest = rest.trim();
            rest.strip_prefix("TypeName")
                .map(str::trim_start)
                .and_then(|r| r.strip_prefix('='))
                .map_or(rest, str::trim)
        }
        None => trimmed,
    };
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    let start = offset_of(name);
    Some(start..start + name.len())
}

/// Resolve a markup type name: unprefixed known names map to the schema.
fn resolve_name<'a>(value: &Cow<'a, str>, range: Range<usize>) -> TypeRef<'a> {
    let name = &value[range.clone()];
    if !name.contains(':') {
        let known = KnownElement::from_name(name);
        if known.is_known() {
            return TypeRef::Known(known);
        }
    }
    TypeRef::Named(match value {
        Cow::Borrowed(text) => {
            let text: &'a str = text;
            Cow::Borrowed(&text[range])
        }
        Cow::Owned(text) => Cow::Owned(text[range].to_owned()),
    })
}

/// Forward-only key scan over records.
#[derive(Debug, Clone)]
pub struct KeyExtractor<'a> {
    state: ScanState,
    owner: Option<TypeRef<'a>>,
    position: Option<SourcePos>,
}

impl Default for KeyExtractor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> KeyExtractor<'a> {
    pub fn new() -> Self {
        Self {
            state: ScanState::ScanningOutermost,
            owner: None,
            position: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Last source position seen.
    pub fn position(&self) -> Option<SourcePos> {
        self.position
    }

    fn not_found(&mut self, reason: impl Into<String>) -> Error {
        self.state = ScanState::NotFound;
        let reason = reason.into();
        log::debug!("[DICT-KEY] no key: {}", reason);
        Error::KeyNotFound {
            reason,
            position: self.position,
        }
    }

    /// Advance over one record. `Ok(Some(key))` ends the scan.
    pub fn feed(&mut self, record: &Record<'a>) -> Result<Option<DictionaryKey<'a>>> {
        match self.state {
            ScanState::ScanningOutermost | ScanState::LookingForKeyAttribute => {}
            ScanState::Found => return Ok(None),
            ScanState::NotFound => return Err(self.not_found("scan already failed")),
        }
        match record {
            Record::LinePosition(pos) => {
                self.position = Some(*pos);
                Ok(None)
            }
            Record::ElementStart(ty) => {
                if self.state == ScanState::ScanningOutermost {
                    self.owner = Some(ty.clone());
                    self.state = ScanState::LookingForKeyAttribute;
                    Ok(None)
                } else {
                    Err(self.not_found(format!("body of {} began with {}", self.owner_name(), ty)))
                }
            }
            Record::Property { member, value } => {
                if self.state != ScanState::LookingForKeyAttribute || !self.owns(&member.owner) {
                    return Ok(None);
                }
                match &*member.name {
                    TARGET_TYPE_MEMBER => {
                        let ty = self.type_value(value)?;
                        self.found(DictionaryKey::Type(ty))
                    }
                    DATA_TYPE_MEMBER => {
                        let ty = self.type_value(value)?;
                        self.check_data_type(&ty)?;
                        self.found(DictionaryKey::DataTemplate(ty))
                    }
                    _ => Ok(None),
                }
            }
            Record::ElementEnd => Err(self.not_found(format!("{} ended", self.owner_name()))),
            Record::Text(_) => Err(self.not_found("content text before key")),
            Record::PropertyComplexStart(member) | Record::PropertyListStart(member) => {
                Err(self.not_found(format!("{}.{} began the body", member.owner, member.name)))
            }
            Record::PropertyComplexEnd | Record::PropertyListEnd => {
                Err(self.not_found("unbalanced property end"))
            }
        }
    }

    /// End of input without a key.
    pub fn finish(mut self) -> Result<DictionaryKey<'a>> {
        Err(self.not_found("record stream ended"))
    }

    fn owner_name(&self) -> String {
        self.owner
            .as_ref()
            .map_or_else(|| "<none>".to_string(), ToString::to_string)
    }

    /// The property is declared on the outermost element or an ancestor.
    fn owns(&self, declaring: &TypeRef<'_>) -> bool {
        self.owner.as_ref().is_some_and(|owner| owner.is_a(declaring))
    }

    fn found(&mut self, key: DictionaryKey<'a>) -> Result<Option<DictionaryKey<'a>>> {
        self.state = ScanState::Found;
        log::debug!("[DICT-KEY] {} keyed by {}", self.owner_name(), key);
        Ok(Some(key))
    }

    fn type_value(&mut self, value: &Cow<'a, str>) -> Result<TypeRef<'a>> {
        match parse_type_reference(value) {
            Some(range) => Ok(resolve_name(value, range)),
            None => Err(self.not_found(format!("'{}' is not a type reference", value))),
        }
    }

    fn check_data_type(&mut self, ty: &TypeRef<'a>) -> Result<()> {
        let unusable = match ty {
            TypeRef::Known(element) => {
                *element == KnownElement::Object || element.kind() == Some(ElementKind::Interface)
            }
            TypeRef::Named(_) => false,
        };
        if unusable {
            self.state = ScanState::NotFound;
            return Err(Error::InvalidDataType {
                name: ty.to_string(),
                position: self.position,
            });
        }
        Ok(())
    }
}

/// Extract the implicit key from a record sequence.
pub fn extract_key<'a, I>(records: I) -> Result<DictionaryKey<'a>>
where
    I: IntoIterator<Item = Record<'a>>,
{
    let mut extractor = KeyExtractor::new();
    for record in records {
        if let Some(key) = extractor.feed(&record)? {
            return Ok(key);
        }
    }
    extractor.finish()
}

#[cfg(test)]
mod tests;
