// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Path mini-language codec for `Geometry`, `PathGeometry` and `StreamGeometry`.
//!
//! Text form: an optional fill rule (`F0` even-odd, `F1` nonzero) followed by
//! drawing commands. Upper-case commands take absolute coordinates, lower-case
//! ones are relative to the current point:
//!
//! | Command | Parameters |
//! |---------|------------|
//! | `M` | `x,y` (further pairs are implicit `L`) |
//! | `L` | `x,y` |
//! | `H` / `V` | `x` / `y` |
//! | `C` | `x1,y1 x2,y2 x,y` |
//! | `Q` | `x1,y1 x,y` |
//! | `S` | `x2,y2 x,y` (first control reflected from the previous `C`/`S`) |
//! | `T` | `x,y` (control reflected from the previous `Q`/`T`) |
//! | `A` | `rx,ry rotation large-arc sweep x,y` |
//! | `Z` | none |
//!
//! Parameters may repeat after a command without restating it. Numbers need
//! no separator where the grammar is unambiguous (`10-5`, `.5.5`), and arc
//! flags are single `0`/`1` characters (`A10,10 0 10 5,5`). `Infinity`,
//! `-Infinity` and `NaN` are accepted as in point lists.
//!
//! Wire form:
//!
//! ```text
//! u8 fill rule | u32 figure count | figures...
//! figure:  u8 flags (bit 0 closed, bit 1 filled) | start x,y | u32 segment count | segments...
//! segment: u8 tag | tag-specific scalars (arcs carry an extra u8 flags byte)
//! ```
//!
//! All coordinates are absolute and stored as tagged scalars.

use super::cursor::{ByteReader, ByteWriter};
use super::scalar::{read_scalar, write_scalar};
use super::tokenizer::parse_f64;
use super::value::{CodecValue, FillRule, PathFigure, PathGeometry, PathSegment, Point, Size};
use super::StructuredCodec;
use crate::error::{DecodeError, Error, Result};
use crate::schema::KnownElement;

const FIGURE_CLOSED: u8 = 0b01;
const FIGURE_FILLED: u8 = 0b10;
const ARC_LARGE: u8 = 0b01;
const ARC_SWEEP: u8 = 0b10;
const SPECIAL_NUMBERS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SegmentTag {
    Line = 1,
    Bezier = 2,
    QuadraticBezier = 3,
    Arc = 4,
}

impl SegmentTag {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(SegmentTag::Line),
            2 => Some(SegmentTag::Bezier),
            3 => Some(SegmentTag::QuadraticBezier),
            4 => Some(SegmentTag::Arc),
            _ => None,
        }
    }
}

/// Control point available for reflection by the next `S` or `T`.
#[derive(Debug, Clone, Copy)]
enum LastControl {
    None,
    Cubic(Point),
    Quadratic(Point),
}

/// Parse path text into absolute-coordinate geometry.
pub fn parse_path(codec: &'static str, text: &str) -> Result<PathGeometry> {
    PathParser::new(codec, text).parse()
}

struct PathParser<'a> {
    codec: &'static str,
    text: &'a str,
    pos: usize,
    current: Point,
    last_control: LastControl,
    figure: Option<PathFigure>,
    geometry: PathGeometry,
}

impl<'a> PathParser<'a> {
    fn new(codec: &'static str, text: &'a str) -> Self {
        Self {
            codec,
            text,
            pos: 0,
            current: Point::default(),
            last_control: LastControl::None,
            figure: None,
            geometry: PathGeometry::default(),
        }
    }

    fn error(&self, offset: usize, reason: impl Into<String>) -> Error {
        Error::conversion(self.codec, offset, reason)
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Whitespace, then at most one comma, then whitespace.
    fn skip_separator(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.pos += 1;
            self.skip_whitespace();
        }
    }

    /// True if another parameter follows before the next command letter.
    fn more_numbers(&self) -> bool {
        let ws = |c: char| c.is_ascii_whitespace();
        let rest = self.text[self.pos..].trim_start_matches(ws);
        let rest = rest.strip_prefix(',').map_or(rest, |r| r.trim_start_matches(ws));
        let numeric = rest
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'));
        numeric || SPECIAL_NUMBERS.iter().any(|special| rest.starts_with(special))
    }

    fn read_number(&mut self) -> Result<f64> {
        self.skip_separator();
        let start = self.pos;
        let text = self.text;
        if let Some(special) = SPECIAL_NUMBERS
            .iter()
            .find(|special| text[start..].starts_with(*special))
        {
            let value = parse_f64(special)
                .ok_or_else(|| self.error(start, format!("'{}' is not a number", special)))?;
            self.pos = start + special.len();
            return Ok(value);
        }
        let bytes = text.as_bytes();
        let at = |i: usize| bytes.get(i).copied();
        let mut end = start;
        if matches!(at(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let mut digits = 0;
        while at(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
        if at(end) == Some(b'.') {
            end += 1;
            while at(end).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return Err(self.error(start, "expected a number"));
        }
        if matches!(at(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(at(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = exp;
            while at(exp).is_some_and(|b| b.is_ascii_digit()) {
                exp += 1;
            }
            if exp > exp_digits {
                end = exp;
            }
        }
        let token = &text[start..end];
        let value = token
            .parse::<f64>()
            .map_err(|_| self.error(start, format!("'{}' is not a number", token)))?;
        self.pos = end;
        Ok(value)
    }

    fn read_point(&mut self, relative: bool) -> Result<Point> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok(if relative {
            Point::new(self.current.x + x, self.current.y + y)
        } else {
            Point::new(x, y)
        })
    }

    /// One `0` or `1` character; the next parameter may follow directly.
    fn read_flag(&mut self) -> Result<bool> {
        self.skip_separator();
        let flag = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(self.error(self.pos, "arc flag must be 0 or 1")),
        };
        self.pos += 1;
        Ok(flag)
    }

    fn finish_figure(&mut self) {
        if let Some(figure) = self.figure.take() {
            self.geometry.figures.push(figure);
        }
    }

    fn begin_figure(&mut self, start: Point) {
        self.finish_figure();
        self.figure = Some(PathFigure {
            start_point: start,
            segments: Vec::new(),
            is_closed: false,
            is_filled: true,
        });
        self.current = start;
    }

    /// Append a segment, opening a figure at the current point after `Z`.
    fn push(&mut self, segment: PathSegment, end: Point) {
        if self.figure.is_none() {
            self.begin_figure(self.current);
        }
        if let Some(figure) = self.figure.as_mut() {
            figure.segments.push(segment);
        }
        self.current = end;
    }

    fn parse_fill_rule(&mut self) -> Result<()> {
        self.skip_whitespace();
        if !matches!(self.peek(), Some(b'F' | b'f')) {
            return Ok(());
        }
        let offset = self.pos;
        self.pos += 1;
        self.skip_whitespace();
        self.geometry.fill_rule = match self.peek() {
            Some(b'0') => FillRule::EvenOdd,
            Some(b'1') => FillRule::Nonzero,
            _ => return Err(self.error(offset, "fill rule must be F0 or F1")),
        };
        self.pos += 1;
        Ok(())
    }

    fn parse(mut self) -> Result<PathGeometry> {
        self.parse_fill_rule()?;
        let mut started = false;
        loop {
            self.skip_whitespace();
            let offset = self.pos;
            let Some(byte) = self.peek() else {
                break;
            };
            if !byte.is_ascii_alphabetic() {
                return Err(self.error(offset, format!("expected a command, found '{}'", byte as char)));
            }
            self.pos += 1;
            let relative = byte.is_ascii_lowercase();
            let command = byte.to_ascii_uppercase();
            if !started && command != b'M' {
                return Err(self.error(offset, "path must begin with M"));
            }
            started = true;
            self.command(command, relative, offset)?;
        }
        self.finish_figure();
        Ok(self.geometry)
    }

    fn command(&mut self, command: u8, relative: bool, offset: usize) -> Result<()> {
        match command {
            b'Z' => {
                if let Some(figure) = self.figure.as_mut() {
                    figure.is_closed = true;
                    self.current = figure.start_point;
                }
                self.finish_figure();
                self.last_control = LastControl::None;
                return Ok(());
            }
            b'M' => {
                let start = self.read_point(relative)?;
                self.begin_figure(start);
                self.last_control = LastControl::None;
                while self.more_numbers() {
                    let point = self.read_point(relative)?;
                    self.push(PathSegment::Line(point), point);
                }
                return Ok(());
            }
            b'L' | b'H' | b'V' | b'C' | b'Q' | b'S' | b'T' | b'A' => {}
            other => {
                return Err(self.error(offset, format!("unknown command '{}'", other as char)));
            }
        }
        loop {
            self.segment(command, relative)?;
            if !self.more_numbers() {
                return Ok(());
            }
        }
    }

    fn segment(&mut self, command: u8, relative: bool) -> Result<()> {
        let from = self.current;
        match command {
            b'L' => {
                let point = self.read_point(relative)?;
                self.push(PathSegment::Line(point), point);
                self.last_control = LastControl::None;
            }
            b'H' => {
                let x = self.read_number()?;
                let point = Point::new(if relative { from.x + x } else { x }, from.y);
                self.push(PathSegment::Line(point), point);
                self.last_control = LastControl::None;
            }
            b'V' => {
                let y = self.read_number()?;
                let point = Point::new(from.x, if relative { from.y + y } else { y });
                self.push(PathSegment::Line(point), point);
                self.last_control = LastControl::None;
            }
            b'C' => {
                let c1 = self.read_point(relative)?;
                let c2 = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.push(PathSegment::Bezier(c1, c2, end), end);
                self.last_control = LastControl::Cubic(c2);
            }
            b'S' => {
                let c1 = match self.last_control {
                    LastControl::Cubic(c) => reflect(c, from),
                    _ => from,
                };
                let c2 = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.push(PathSegment::Bezier(c1, c2, end), end);
                self.last_control = LastControl::Cubic(c2);
            }
            b'Q' => {
                let c = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.push(PathSegment::QuadraticBezier(c, end), end);
                self.last_control = LastControl::Quadratic(c);
            }
            b'T' => {
                let c = match self.last_control {
                    LastControl::Quadratic(c) => reflect(c, from),
                    _ => from,
                };
                let end = self.read_point(relative)?;
                self.push(PathSegment::QuadraticBezier(c, end), end);
                self.last_control = LastControl::Quadratic(c);
            }
            _ => {
                let width = self.read_number()?;
                let height = self.read_number()?;
                let rotation_angle = self.read_number()?;
                let is_large_arc = self.read_flag()?;
                let sweep_clockwise = self.read_flag()?;
                let point = self.read_point(relative)?;
                self.push(
                    PathSegment::Arc {
                        point,
                        size: Size { width, height },
                        rotation_angle,
                        is_large_arc,
                        sweep_clockwise,
                    },
                    point,
                );
                self.last_control = LastControl::None;
            }
        }
        Ok(())
    }
}

/// Reflect `control` through `about`.
fn reflect(control: Point, about: Point) -> Point {
    Point::new(2.0 * about.x - control.x, 2.0 * about.y - control.y)
}

fn write_point(out: &mut ByteWriter, point: Point) {
    write_scalar(out, point.x);
    write_scalar(out, point.y);
}

fn read_point(input: &mut ByteReader<'_>) -> std::result::Result<Point, DecodeError> {
    Ok(Point::new(read_scalar(input)?, read_scalar(input)?))
}

pub fn write_geometry(out: &mut ByteWriter, geometry: &PathGeometry) {
    out.write_u8(geometry.fill_rule as u8);
    out.write_u32_le(geometry.figures.len() as u32);
    for figure in &geometry.figures {
        let mut flags = 0;
        if figure.is_closed {
            flags |= FIGURE_CLOSED;
        }
        if figure.is_filled {
            flags |= FIGURE_FILLED;
        }
        out.write_u8(flags);
        write_point(out, figure.start_point);
        out.write_u32_le(figure.segments.len() as u32);
        for segment in &figure.segments {
            match *segment {
                PathSegment::Line(point) => {
                    out.write_u8(SegmentTag::Line as u8);
                    write_point(out, point);
                }
                PathSegment::Bezier(c1, c2, end) => {
                    out.write_u8(SegmentTag::Bezier as u8);
                    write_point(out, c1);
                    write_point(out, c2);
                    write_point(out, end);
                }
                PathSegment::QuadraticBezier(c, end) => {
                    out.write_u8(SegmentTag::QuadraticBezier as u8);
                    write_point(out, c);
                    write_point(out, end);
                }
                PathSegment::Arc {
                    point,
                    size,
                    rotation_angle,
                    is_large_arc,
                    sweep_clockwise,
                } => {
                    out.write_u8(SegmentTag::Arc as u8);
                    write_point(out, point);
                    write_scalar(out, size.width);
                    write_scalar(out, size.height);
                    write_scalar(out, rotation_angle);
                    let mut arc_flags = 0;
                    if is_large_arc {
                        arc_flags |= ARC_LARGE;
                    }
                    if sweep_clockwise {
                        arc_flags |= ARC_SWEEP;
                    }
                    out.write_u8(arc_flags);
                }
            }
        }
    }
}

/// Validate a count against the bytes left; each entry needs `min_len` bytes.
fn checked_count(
    input: &mut ByteReader<'_>,
    min_len: usize,
) -> std::result::Result<usize, DecodeError> {
    let offset = input.offset();
    let count = input.read_u32_le()? as usize;
    if count.saturating_mul(min_len) > input.remaining() {
        return Err(DecodeError::Truncated { offset });
    }
    Ok(count)
}

fn read_flags(input: &mut ByteReader<'_>, mask: u8) -> std::result::Result<u8, DecodeError> {
    let offset = input.offset();
    let flags = input.read_u8()?;
    if flags & !mask != 0 {
        return Err(DecodeError::InvalidTag { tag: flags, offset });
    }
    Ok(flags)
}

pub fn read_geometry(input: &mut ByteReader<'_>) -> std::result::Result<PathGeometry, DecodeError> {
    let offset = input.offset();
    let fill_rule = match input.read_u8()? {
        0 => FillRule::EvenOdd,
        1 => FillRule::Nonzero,
        tag => return Err(DecodeError::InvalidTag { tag, offset }),
    };
    // flags + two scalars + segment count
    let figure_count = checked_count(input, 7)?;
    let mut figures = Vec::with_capacity(figure_count);
    for _ in 0..figure_count {
        let flags = read_flags(input, FIGURE_CLOSED | FIGURE_FILLED)?;
        let start_point = read_point(input)?;
        // tag + two scalars
        let segment_count = checked_count(input, 3)?;
        let mut segments = Vec::with_capacity(segment_count);
        for _ in 0..segment_count {
            let offset = input.offset();
            let raw = input.read_u8()?;
            let tag = SegmentTag::from_u8(raw).ok_or(DecodeError::InvalidTag { tag: raw, offset })?;
            segments.push(match tag {
                SegmentTag::Line => PathSegment::Line(read_point(input)?),
                SegmentTag::Bezier => {
                    PathSegment::Bezier(read_point(input)?, read_point(input)?, read_point(input)?)
                }
                SegmentTag::QuadraticBezier => {
                    PathSegment::QuadraticBezier(read_point(input)?, read_point(input)?)
                }
                SegmentTag::Arc => {
                    let point = read_point(input)?;
                    let size = Size {
                        width: read_scalar(input)?,
                        height: read_scalar(input)?,
                    };
                    let rotation_angle = read_scalar(input)?;
                    let arc_flags = read_flags(input, ARC_LARGE | ARC_SWEEP)?;
                    PathSegment::Arc {
                        point,
                        size,
                        rotation_angle,
                        is_large_arc: arc_flags & ARC_LARGE != 0,
                        sweep_clockwise: arc_flags & ARC_SWEEP != 0,
                    }
                }
            });
        }
        figures.push(PathFigure {
            start_point,
            segments,
            is_closed: flags & FIGURE_CLOSED != 0,
            is_filled: flags & FIGURE_FILLED != 0,
        });
    }
    Ok(PathGeometry { fill_rule, figures })
}

#[derive(Debug)]
pub struct PathCodec {
    name: &'static str,
    value_type: KnownElement,
}

impl PathCodec {
    pub const fn new(name: &'static str, value_type: KnownElement) -> Self {
        Self { name, value_type }
    }
}

impl StructuredCodec for PathCodec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn value_type(&self) -> KnownElement {
        self.value_type
    }

    fn parse(&self, text: &str) -> Result<CodecValue> {
        parse_path(self.name, text).map(CodecValue::Geometry)
    }

    fn write(&self, value: &CodecValue, out: &mut ByteWriter) -> Result<()> {
        let CodecValue::Geometry(geometry) = value else {
            return Err(Error::conversion(self.name, 0, "value of another codec"));
        };
        write_geometry(out, geometry);
        Ok(())
    }

    fn read(&self, input: &mut ByteReader<'_>) -> std::result::Result<CodecValue, DecodeError> {
        read_geometry(input).map(CodecValue::Geometry)
    }
}

#[cfg(test)]
mod tests;
