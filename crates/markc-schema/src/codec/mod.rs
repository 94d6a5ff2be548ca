// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structured codecs.
//!
//! A handful of value types have text forms that are long and regular
//! (coordinate lists, index lists, path geometry). For those the compiler
//! skips the generic converter path and emits a compact binary payload
//! instead; the loader decodes it straight back into a value.
//!
//! Codecs are stateless `static` instances selected by the value's type
//! identifier through [`codec_for`].

use std::fmt;

mod collections;
mod cursor;
mod integers;
mod path;
mod scalar;
mod tokenizer;
mod value;

pub use collections::{TupleCollectionCodec, TupleKind};
pub use cursor::{ByteReader, ByteWriter};
pub use integers::{Int32CollectionCodec, IntWidth};
pub use path::{parse_path, PathCodec, SegmentTag};
pub use scalar::{classify, read_scalar, write_scalar, ScalarTag};
pub use tokenizer::{parse_f64, NumberTokenizer};
pub use value::{
    CodecValue, FillRule, PathFigure, PathGeometry, PathSegment, Point, Point3D, Size, Vector,
    Vector3D,
};

use crate::error::{DecodeError, Result};
use crate::schema::KnownElement;

/// Binary codec for one value type.
///
/// `encode` is the compile-time direction (text to bytes), `decode` the
/// load-time direction. For every text `parse` accepts,
/// `decode(encode(text)) == parse(text)`.
pub trait StructuredCodec: Send + Sync + fmt::Debug {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Type identifier this codec owns.
    fn value_type(&self) -> KnownElement;

    /// Parse the markup text form.
    fn parse(&self, text: &str) -> Result<CodecValue>;

    /// Append the binary form of `value`.
    fn write(&self, value: &CodecValue, out: &mut ByteWriter) -> Result<()>;

    /// Read one value, leaving the reader after it.
    fn read(&self, input: &mut ByteReader<'_>) -> std::result::Result<CodecValue, DecodeError>;

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let value = self.parse(text)?;
        let mut out = ByteWriter::with_capacity(text.len());
        self.write(&value, &mut out)?;
        log::debug!(
            "[CODEC] {} encoded {} text bytes into {}",
            self.name(),
            text.len(),
            out.offset()
        );
        Ok(out.into_bytes())
    }

    /// Decode a complete payload; trailing bytes are an error.
    fn decode(&self, bytes: &[u8]) -> Result<CodecValue> {
        let mut input = ByteReader::new(bytes);
        let value = self.read(&mut input)?;
        if !input.is_eof() {
            return Err(DecodeError::Invalid {
                offset: input.offset(),
                reason: format!("{} trailing bytes after {} payload", input.remaining(), self.name()),
            }
            .into());
        }
        Ok(value)
    }
}

static POINTS: TupleCollectionCodec = TupleCollectionCodec::new(
    "PointCollection",
    KnownElement::PointCollection,
    TupleKind::Point,
);
static VECTORS: TupleCollectionCodec = TupleCollectionCodec::new(
    "VectorCollection",
    KnownElement::VectorCollection,
    TupleKind::Vector,
);
static POINTS_3D: TupleCollectionCodec = TupleCollectionCodec::new(
    "Point3DCollection",
    KnownElement::Point3DCollection,
    TupleKind::Point3D,
);
static VECTORS_3D: TupleCollectionCodec = TupleCollectionCodec::new(
    "Vector3DCollection",
    KnownElement::Vector3DCollection,
    TupleKind::Vector3D,
);
static INT32S: Int32CollectionCodec = Int32CollectionCodec;
static GEOMETRY: PathCodec = PathCodec::new("Geometry", KnownElement::Geometry);
static PATH_GEOMETRY: PathCodec = PathCodec::new("PathGeometry", KnownElement::PathGeometry);
static STREAM_GEOMETRY: PathCodec = PathCodec::new("StreamGeometry", KnownElement::StreamGeometry);

/// Codec owning values of `element`, if any.
///
/// `DoubleCollection` deliberately has none: attributes such as
/// `GlyphRun.AdvanceWidths` rely on their property-level list converter.
pub fn codec_for(element: KnownElement) -> Option<&'static dyn StructuredCodec> {
    let codec: &'static dyn StructuredCodec = match element {
        KnownElement::PointCollection => &POINTS,
        KnownElement::VectorCollection => &VECTORS,
        KnownElement::Point3DCollection => &POINTS_3D,
        KnownElement::Vector3DCollection => &VECTORS_3D,
        KnownElement::Int32Collection => &INT32S,
        KnownElement::Geometry => &GEOMETRY,
        KnownElement::PathGeometry => &PATH_GEOMETRY,
        KnownElement::StreamGeometry => &STREAM_GEOMETRY,
        _ => return None,
    };
    Some(codec)
}

/// Every registered codec, in identifier order.
pub fn codecs() -> impl Iterator<Item = &'static dyn StructuredCodec> {
    KnownElement::iter().filter_map(codec_for)
}

/// Consistency checks for the codec table. Returns one message per defect.
pub fn verify_tables() -> Vec<String> {
    let mut problems = Vec::new();
    for codec in codecs() {
        let owner = codec.value_type();
        if codec_for(owner).map(|c| c.name()) != Some(codec.name()) {
            problems.push(format!("codec {} is not selected for {}", codec.name(), owner.name()));
        }
        if codec.name() != owner.name() {
            problems.push(format!("codec {} owns {}", codec.name(), owner.name()));
        }
    }
    problems
}
