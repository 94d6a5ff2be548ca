// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Coordinate-tuple collections: 2-D and 3-D points and vectors.
//!
//! Wire form: `u32` tuple count, then every component as a tagged scalar.

use super::cursor::{ByteReader, ByteWriter};
use super::scalar::{read_scalar, write_scalar};
use super::tokenizer::NumberTokenizer;
use super::value::{CodecValue, Point, Point3D, Vector, Vector3D};
use super::StructuredCodec;
use crate::error::{DecodeError, Error, Result};
use crate::schema::KnownElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleKind {
    Point,
    Vector,
    Point3D,
    Vector3D,
}

impl TupleKind {
    pub const fn arity(self) -> usize {
        match self {
            TupleKind::Point | TupleKind::Vector => 2,
            TupleKind::Point3D | TupleKind::Vector3D => 3,
        }
    }
}

#[derive(Debug)]
pub struct TupleCollectionCodec {
    name: &'static str,
    value_type: KnownElement,
    kind: TupleKind,
}

impl TupleCollectionCodec {
    pub const fn new(name: &'static str, value_type: KnownElement, kind: TupleKind) -> Self {
        Self {
            name,
            value_type,
            kind,
        }
    }

    pub fn kind(&self) -> TupleKind {
        self.kind
    }

    /// Flatten a value of this codec's kind into its components.
    fn components(&self, value: &CodecValue) -> Option<Vec<f64>> {
        Some(match (self.kind, value) {
            (TupleKind::Point, CodecValue::Points(v)) => v.iter().flat_map(|p| [p.x, p.y]).collect(),
            (TupleKind::Vector, CodecValue::Vectors(v)) => {
                v.iter().flat_map(|p| [p.x, p.y]).collect()
            }
            (TupleKind::Point3D, CodecValue::Points3D(v)) => {
                v.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
            }
            (TupleKind::Vector3D, CodecValue::Vectors3D(v)) => {
                v.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
            }
            _ => return None,
        })
    }

    /// Rebuild a value from `arity`-sized chunks of components.
    fn assemble(&self, components: &[f64]) -> CodecValue {
        let chunks = components.chunks_exact(self.kind.arity());
        match self.kind {
            TupleKind::Point => CodecValue::Points(chunks.map(|c| Point::new(c[0], c[1])).collect()),
            TupleKind::Vector => {
                CodecValue::Vectors(chunks.map(|c| Vector { x: c[0], y: c[1] }).collect())
            }
            TupleKind::Point3D => CodecValue::Points3D(
                chunks
                    .map(|c| Point3D {
                        x: c[0],
                        y: c[1],
                        z: c[2],
                    })
                    .collect(),
            ),
            TupleKind::Vector3D => CodecValue::Vectors3D(
                chunks
                    .map(|c| Vector3D {
                        x: c[0],
                        y: c[1],
                        z: c[2],
                    })
                    .collect(),
            ),
        }
    }
}

impl StructuredCodec for TupleCollectionCodec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn value_type(&self) -> KnownElement {
        self.value_type
    }

    fn parse(&self, text: &str) -> Result<CodecValue> {
        let tokenizer = NumberTokenizer::new(self.name, text);
        let components: Vec<f64> = match self.kind.arity() {
            2 => tokenizer.tuples::<2>()?.concat(),
            _ => tokenizer.tuples::<3>()?.concat(),
        };
        Ok(self.assemble(&components))
    }

    fn write(&self, value: &CodecValue, out: &mut ByteWriter) -> Result<()> {
        let components = self
            .components(value)
            .ok_or_else(|| Error::conversion(self.name, 0, "value of another codec"))?;
        let count = components.len() / self.kind.arity();
        out.write_u32_le(count as u32);
        for component in components {
            write_scalar(out, component);
        }
        Ok(())
    }

    fn read(&self, input: &mut ByteReader<'_>) -> std::result::Result<CodecValue, DecodeError> {
        let count = input.read_u32_le()? as usize;
        let total = count.saturating_mul(self.kind.arity());
        // Every scalar takes at least one byte.
        if total > input.remaining() {
            return Err(DecodeError::Truncated {
                offset: input.offset(),
            });
        }
        let mut components = Vec::with_capacity(total);
        for _ in 0..total {
            components.push(read_scalar(input)?);
        }
        Ok(self.assemble(&components))
    }
}
