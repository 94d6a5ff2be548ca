// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Values produced by structured codecs.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FillRule {
    #[default]
    EvenOdd = 0,
    Nonzero = 1,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line(Point),
    Bezier(Point, Point, Point),
    QuadraticBezier(Point, Point),
    Arc {
        point: Point,
        size: Size,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep_clockwise: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathFigure {
    pub start_point: Point,
    pub segments: Vec<PathSegment>,
    pub is_closed: bool,
    pub is_filled: bool,
}

/// Parsed path geometry with absolute coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    pub fill_rule: FillRule,
    pub figures: Vec<PathFigure>,
}

/// Decoded payload of a structured codec.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecValue {
    Points(Vec<Point>),
    Vectors(Vec<Vector>),
    Points3D(Vec<Point3D>),
    Vectors3D(Vec<Vector3D>),
    Int32s(Vec<i32>),
    Geometry(PathGeometry),
}

impl CodecValue {
    /// Number of top-level items (points, integers, figures).
    pub fn len(&self) -> usize {
        match self {
            CodecValue::Points(v) => v.len(),
            CodecValue::Vectors(v) => v.len(),
            CodecValue::Points3D(v) => v.len(),
            CodecValue::Vectors3D(v) => v.len(),
            CodecValue::Int32s(v) => v.len(),
            CodecValue::Geometry(g) => g.figures.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
