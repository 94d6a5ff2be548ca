// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binary record streams.
//!
//! ```text
//! stream  := SchemaStamp record*
//! record  := u8 tag payload
//! ```
//!
//! | Tag | Record | Payload |
//! |-----|--------|---------|
//! | 1 | `ElementStart` | `i16` type |
//! | 2 | `ElementEnd` | none |
//! | 3 | `Property` | `i16` member, `str` value |
//! | 4 | `Text` | `str` |
//! | 5 | `PropertyComplexStart` | `i16` member |
//! | 6 | `PropertyComplexEnd` | none |
//! | 7 | `PropertyListStart` | `i16` member |
//! | 8 | `PropertyListEnd` | none |
//! | 9 | `LinePosition` | `u32` line, `u32` column |
//! | 10 | `DefineType` | `u16` local id, `str` full name |
//! | 11 | `DefineMember` | `u16` local id, `i16` owner type, `str` name |
//!
//! Identifiers use the negated wire form of [`crate::schema`]; non-negative
//! values index the stream-local definitions, which the writer emits just
//! before their first use and numbers from zero.

use super::key::{DictionaryKey, KeyExtractor};
use super::{MemberRef, Record, TypeRef};
use crate::codec::{ByteReader, ByteWriter};
use crate::error::{DecodeError, Error, Result, SchemaError, SourcePos};
use crate::schema::{KnownElement, KnownProperty, SchemaStamp, WireSymbol};
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordTag {
    ElementStart = 1,
    ElementEnd = 2,
    Property = 3,
    Text = 4,
    PropertyComplexStart = 5,
    PropertyComplexEnd = 6,
    PropertyListStart = 7,
    PropertyListEnd = 8,
    LinePosition = 9,
    DefineType = 10,
    DefineMember = 11,
}

impl RecordTag {
    pub fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            1 => RecordTag::ElementStart,
            2 => RecordTag::ElementEnd,
            3 => RecordTag::Property,
            4 => RecordTag::Text,
            5 => RecordTag::PropertyComplexStart,
            6 => RecordTag::PropertyComplexEnd,
            7 => RecordTag::PropertyListStart,
            8 => RecordTag::PropertyListEnd,
            9 => RecordTag::LinePosition,
            10 => RecordTag::DefineType,
            11 => RecordTag::DefineMember,
            _ => return None,
        })
    }
}

/// Highest stream-local index; wire values are `i16`.
const MAX_LOCAL: usize = i16::MAX as usize;

/// Serializes records behind a schema stamp.
#[derive(Debug)]
pub struct RecordWriter {
    out: ByteWriter,
    types: HashMap<String, u16>,
    members: HashMap<(i16, String), u16>,
    records: usize,
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordWriter {
    pub fn new() -> Self {
        let mut header = Vec::with_capacity(SchemaStamp::ENCODED_LEN);
        SchemaStamp::current().write_to(&mut header);
        let mut out = ByteWriter::with_capacity(256);
        out.write_bytes(&header);
        Self {
            out,
            types: HashMap::new(),
            members: HashMap::new(),
            records: 0,
        }
    }

    fn local_overflow(&self, what: &str) -> Error {
        Error::conversion(
            TemplateBodyCodec::NAME,
            self.records,
            format!("more than {} stream-local {}", MAX_LOCAL + 1, what),
        )
    }

    fn type_wire(&mut self, ty: &TypeRef<'_>) -> Result<i16> {
        let full_name = match ty {
            TypeRef::Known(element) if element.is_known() => return Ok(element.to_wire()),
            TypeRef::Known(element) => {
                return Err(SchemaError::ElementOutOfRange(i32::from(element.as_i16())).into())
            }
            TypeRef::Named(name) => name,
        };
        let known = KnownElement::from_full_name(full_name);
        if known.is_known() {
            return Ok(known.to_wire());
        }
        if let Some(id) = self.types.get(&**full_name) {
            return Ok(*id as i16);
        }
        let id = self.types.len();
        if id > MAX_LOCAL {
            return Err(self.local_overflow("types"));
        }
        let id = id as u16;
        self.out.write_u8(RecordTag::DefineType as u8);
        self.out.write_u16_le(id);
        self.out.write_str(full_name);
        self.types.insert(full_name.to_string(), id);
        log::debug!("[RECORDS] local type {} = {}", id, full_name);
        Ok(id as i16)
    }

    fn member_wire(&mut self, member: &MemberRef<'_>) -> Result<i16> {
        let owner = self.type_wire(&member.owner)?;
        if owner < 0 {
            let property = KnownProperty::lookup(KnownElement::from_i16(-owner)?, &member.name);
            if property.is_known() {
                return Ok(property.to_wire());
            }
        }
        let key = (owner, member.name.to_string());
        if let Some(id) = self.members.get(&key) {
            return Ok(*id as i16);
        }
        let id = self.members.len();
        if id > MAX_LOCAL {
            return Err(self.local_overflow("members"));
        }
        let id = id as u16;
        self.out.write_u8(RecordTag::DefineMember as u8);
        self.out.write_u16_le(id);
        self.out.write_i16_le(owner);
        self.out.write_str(&member.name);
        self.members.insert(key, id);
        Ok(id as i16)
    }

    pub fn write(&mut self, record: &Record<'_>) -> Result<()> {
        match record {
            Record::ElementStart(ty) => {
                let wire = self.type_wire(ty)?;
                self.out.write_u8(RecordTag::ElementStart as u8);
                self.out.write_i16_le(wire);
            }
            Record::ElementEnd => self.out.write_u8(RecordTag::ElementEnd as u8),
            Record::Property { member, value } => {
                let wire = self.member_wire(member)?;
                self.out.write_u8(RecordTag::Property as u8);
                self.out.write_i16_le(wire);
                self.out.write_str(value);
            }
            Record::Text(text) => {
                self.out.write_u8(RecordTag::Text as u8);
                self.out.write_str(text);
            }
            Record::PropertyComplexStart(member) => {
                let wire = self.member_wire(member)?;
                self.out.write_u8(RecordTag::PropertyComplexStart as u8);
                self.out.write_i16_le(wire);
            }
            Record::PropertyComplexEnd => self.out.write_u8(RecordTag::PropertyComplexEnd as u8),
            Record::PropertyListStart(member) => {
                let wire = self.member_wire(member)?;
                self.out.write_u8(RecordTag::PropertyListStart as u8);
                self.out.write_i16_le(wire);
            }
            Record::PropertyListEnd => self.out.write_u8(RecordTag::PropertyListEnd as u8),
            Record::LinePosition(pos) => {
                self.out.write_u8(RecordTag::LinePosition as u8);
                self.out.write_u32_le(pos.line);
                self.out.write_u32_le(pos.column);
            }
        }
        self.records += 1;
        Ok(())
    }

    pub fn write_all(&mut self, records: &[Record<'_>]) -> Result<()> {
        records.iter().try_for_each(|record| self.write(record))
    }

    /// Number of stream-local types defined so far.
    pub fn local_types(&self) -> usize {
        self.types.len()
    }

    pub fn local_members(&self) -> usize {
        self.members.len()
    }

    pub fn finish(self) -> Vec<u8> {
        log::debug!(
            "[RECORDS] wrote {} records ({} bytes, {} local types, {} local members)",
            self.records,
            self.out.offset(),
            self.types.len(),
            self.members.len()
        );
        self.out.into_bytes()
    }
}

/// Reads records back, borrowing names and values from the buffer.
///
/// The stamp is validated in [`RecordReader::new`], before any identifier
/// is interpreted. Iteration stops after the first error.
#[derive(Debug)]
pub struct RecordReader<'a> {
    input: ByteReader<'a>,
    stamp: SchemaStamp,
    types: Vec<&'a str>,
    members: Vec<MemberRef<'a>>,
    failed: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        let stamp = SchemaStamp::read(bytes)?;
        stamp.check()?;
        let mut input = ByteReader::new(bytes);
        input.read_bytes(SchemaStamp::ENCODED_LEN)?;
        Ok(Self {
            input,
            stamp,
            types: Vec::new(),
            members: Vec::new(),
            failed: false,
        })
    }

    pub fn stamp(&self) -> SchemaStamp {
        self.stamp
    }

    fn undefined(offset: usize, what: &str, id: u16) -> Error {
        DecodeError::Invalid {
            offset,
            reason: format!("undefined stream-local {} {}", what, id),
        }
        .into()
    }

    fn read_type(&mut self) -> Result<TypeRef<'a>> {
        let offset = self.input.offset();
        match KnownElement::from_wire(self.input.read_i16_le()?)? {
            WireSymbol::Known(element) => Ok(TypeRef::Known(element)),
            WireSymbol::Local(id) => self
                .types
                .get(usize::from(id))
                .map(|name| TypeRef::Named(Cow::Borrowed(*name)))
                .ok_or_else(|| Self::undefined(offset, "type", id)),
        }
    }

    fn read_member(&mut self) -> Result<MemberRef<'a>> {
        let offset = self.input.offset();
        match KnownProperty::from_wire(self.input.read_i16_le()?)? {
            WireSymbol::Known(property) => Ok(property.into()),
            WireSymbol::Local(id) => self
                .members
                .get(usize::from(id))
                .cloned()
                .ok_or_else(|| Self::undefined(offset, "member", id)),
        }
    }

    fn read_local_id(&mut self, expected: usize) -> Result<()> {
        let offset = self.input.offset();
        let id = self.input.read_u16_le()?;
        if usize::from(id) != expected {
            return Err(DecodeError::Invalid {
                offset,
                reason: format!("local id {} defined out of order, expected {}", id, expected),
            }
            .into());
        }
        Ok(())
    }

    /// Next logical record; definitions are absorbed.
    pub fn next_record(&mut self) -> Result<Option<Record<'a>>> {
        loop {
            if self.input.is_eof() {
                return Ok(None);
            }
            let offset = self.input.offset();
            let raw = self.input.read_u8()?;
            let tag = RecordTag::from_u8(raw).ok_or(DecodeError::InvalidTag { tag: raw, offset })?;
            let record = match tag {
                RecordTag::DefineType => {
                    self.read_local_id(self.types.len())?;
                    let name = self.input.read_str()?;
                    self.types.push(name);
                    continue;
                }
                RecordTag::DefineMember => {
                    self.read_local_id(self.members.len())?;
                    let owner = self.read_type()?;
                    let name = self.input.read_str()?;
                    self.members.push(MemberRef::new(owner, name));
                    continue;
                }
                RecordTag::ElementStart => Record::ElementStart(self.read_type()?),
                RecordTag::ElementEnd => Record::ElementEnd,
                RecordTag::Property => {
                    let member = self.read_member()?;
                    let value = self.input.read_str()?;
                    Record::Property {
                        member,
                        value: Cow::Borrowed(value),
                    }
                }
                RecordTag::Text => Record::Text(Cow::Borrowed(self.input.read_str()?)),
                RecordTag::PropertyComplexStart => Record::PropertyComplexStart(self.read_member()?),
                RecordTag::PropertyComplexEnd => Record::PropertyComplexEnd,
                RecordTag::PropertyListStart => Record::PropertyListStart(self.read_member()?),
                RecordTag::PropertyListEnd => Record::PropertyListEnd,
                RecordTag::LinePosition => {
                    let line = self.input.read_u32_le()?;
                    let column = self.input.read_u32_le()?;
                    Record::LinePosition(SourcePos::new(line, column))
                }
            };
            return Ok(Some(record));
        }
    }
}

impl<'a> Iterator for RecordReader<'a> {
    type Item = Result<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_record() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Element,
    Complex,
    List,
}

/// Check that `records` form one well-nested element tree.
///
/// Returns the index of the offending record and the reason.
fn check_structure(records: &[Record<'_>]) -> std::result::Result<(), (usize, String)> {
    let mut stack = Vec::new();
    let mut roots = 0;
    for (index, record) in records.iter().enumerate() {
        let top = stack.last().copied();
        let expect_close = |stack: &mut Vec<Frame>, frame: Frame| match stack.pop() {
            Some(open) if open == frame => Ok(()),
            open => Err((index, format!("{:?} end closes {:?}", frame, open))),
        };
        match record {
            Record::ElementStart(_) => {
                if stack.is_empty() {
                    roots += 1;
                    if roots > 1 {
                        return Err((index, "more than one root element".into()));
                    }
                }
                stack.push(Frame::Element);
            }
            Record::ElementEnd => expect_close(&mut stack, Frame::Element)?,
            Record::PropertyComplexStart(_) | Record::PropertyListStart(_) => {
                if top != Some(Frame::Element) {
                    return Err((index, "property outside an element".into()));
                }
                stack.push(match record {
                    Record::PropertyComplexStart(_) => Frame::Complex,
                    _ => Frame::List,
                });
            }
            Record::PropertyComplexEnd => expect_close(&mut stack, Frame::Complex)?,
            Record::PropertyListEnd => expect_close(&mut stack, Frame::List)?,
            Record::Property { .. } if top != Some(Frame::Element) => {
                return Err((index, "property outside an element".into()));
            }
            Record::Text(_) if top.is_none() => {
                return Err((index, "text outside the root element".into()));
            }
            Record::Property { .. } | Record::Text(_) | Record::LinePosition(_) => {}
        }
    }
    if roots == 0 {
        return Err((records.len(), "no root element".into()));
    }
    if !stack.is_empty() {
        return Err((records.len(), format!("{} unclosed records", stack.len())));
    }
    Ok(())
}

/// Structured codec for deferred template and style bodies.
///
/// Unlike the value codecs in [`crate::codec`], the input is the record
/// stream the front end produced for the body, not attribute text. A body
/// holds one root element (the template or style itself); the dictionary
/// key can be read back from the encoded form without decoding the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBodyCodec {
    value_type: KnownElement,
}

impl TemplateBodyCodec {
    pub const NAME: &'static str = "TemplateBody";

    /// Codec for `FrameworkTemplate` descendants and `Style`.
    pub fn for_type(element: KnownElement) -> Option<Self> {
        (element.is_a(KnownElement::FrameworkTemplate) || element.is_a(KnownElement::Style))
            .then_some(Self {
                value_type: element,
            })
    }

    pub fn value_type(&self) -> KnownElement {
        self.value_type
    }

    /// Encode a body. Conversion errors carry the record index as offset.
    pub fn encode(&self, records: &[Record<'_>]) -> Result<Vec<u8>> {
        check_structure(records)
            .map_err(|(index, reason)| Error::conversion(Self::NAME, index, reason))?;
        let mut writer = RecordWriter::new();
        writer.write_all(records)?;
        Ok(writer.finish())
    }

    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Vec<Record<'a>>> {
        let records = RecordReader::new(bytes)?.collect::<Result<Vec<_>>>()?;
        check_structure(&records).map_err(|(index, reason)| {
            Error::from(DecodeError::Invalid {
                offset: index,
                reason: format!("record {}: {}", index, reason),
            })
        })?;
        Ok(records)
    }

    /// Scan an encoded body for its implicit dictionary key.
    pub fn extract_key<'a>(&self, bytes: &'a [u8]) -> Result<DictionaryKey<'a>> {
        let mut extractor = KeyExtractor::new();
        for record in RecordReader::new(bytes)? {
            if let Some(key) = extractor.feed(&record?)? {
                return Ok(key);
            }
        }
        extractor.finish()
    }
}
