// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use crate::error::ErrorCode;

const GEOMETRY: PathCodec = PathCodec::new("Geometry", KnownElement::Geometry);

fn parse(text: &str) -> PathGeometry {
    parse_path("Geometry", text).expect("valid path")
}

fn error_offset(text: &str) -> usize {
    match parse_path("Geometry", text) {
        Err(Error::Conversion { offset, .. }) => offset,
        other => panic!("expected conversion error for {:?}, got {:?}", text, other),
    }
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_closed_triangle() {
    let geometry = parse("M 0,0 L 10,0 L 10,10 Z");
    assert_eq!(geometry.fill_rule, FillRule::EvenOdd);
    assert_eq!(geometry.figures.len(), 1);
    let figure = &geometry.figures[0];
    assert_eq!(figure.start_point, p(0.0, 0.0));
    assert!(figure.is_closed);
    assert!(figure.is_filled);
    assert_eq!(
        figure.segments,
        vec![PathSegment::Line(p(10.0, 0.0)), PathSegment::Line(p(10.0, 10.0))]
    );
}

#[test]
fn test_relative_commands_become_absolute() {
    let geometry = parse("m 10,10 l 5,0 v 5 h -5 z");
    let figure = &geometry.figures[0];
    assert_eq!(figure.start_point, p(10.0, 10.0));
    assert_eq!(
        figure.segments,
        vec![
            PathSegment::Line(p(15.0, 10.0)),
            PathSegment::Line(p(15.0, 15.0)),
            PathSegment::Line(p(10.0, 15.0)),
        ]
    );
}

#[test]
fn test_implicit_line_after_move() {
    let geometry = parse("M0,0 10,0 10,10");
    assert_eq!(geometry.figures[0].segments.len(), 2);
    assert!(!geometry.figures[0].is_closed);
}

#[test]
fn test_fill_rule_prefix() {
    assert_eq!(parse("F1 M0,0 L1,1").fill_rule, FillRule::Nonzero);
    assert_eq!(parse("F0 M0,0 L1,1").fill_rule, FillRule::EvenOdd);
    assert_eq!(error_offset("F2 M0,0"), 0);
}

#[test]
fn test_smooth_cubic_reflects_control() {
    let geometry = parse("M0,0 C 0,10 10,10 10,0 S 20,-10 20,0");
    let segments = &geometry.figures[0].segments;
    assert_eq!(
        segments[1],
        PathSegment::Bezier(p(10.0, -10.0), p(20.0, -10.0), p(20.0, 0.0))
    );
    // Without a preceding cubic the current point is the control.
    let geometry = parse("M5,5 S 10,10 20,5");
    assert_eq!(
        geometry.figures[0].segments[0],
        PathSegment::Bezier(p(5.0, 5.0), p(10.0, 10.0), p(20.0, 5.0))
    );
}

#[test]
fn test_smooth_quadratic_reflects_control() {
    let geometry = parse("M0,0 Q 5,10 10,0 T 20,0");
    assert_eq!(
        geometry.figures[0].segments[1],
        PathSegment::QuadraticBezier(p(15.0, -10.0), p(20.0, 0.0))
    );
}

#[test]
fn test_compact_numbers() {
    let geometry = parse("M10-5L.5.5");
    let figure = &geometry.figures[0];
    assert_eq!(figure.start_point, p(10.0, -5.0));
    assert_eq!(figure.segments, vec![PathSegment::Line(p(0.5, 0.5))]);
    assert_eq!(parse("M1e2,0 L0,0").figures[0].start_point, p(100.0, 0.0));
}

#[test]
fn test_arc() {
    let geometry = parse("M0,0 A 10,10 45 1 0 20,20");
    assert_eq!(
        geometry.figures[0].segments[0],
        PathSegment::Arc {
            point: p(20.0, 20.0),
            size: Size {
                width: 10.0,
                height: 10.0
            },
            rotation_angle: 45.0,
            is_large_arc: true,
            sweep_clockwise: false,
        }
    );
    assert!(parse_path("Geometry", "M0,0 A 1,1 0 2 0 3,3").is_err());
    assert_eq!(error_offset("M0,0 A 1,1 0 1.5 0 3,3"), 14);

    // Flags need no separator between them.
    let compact = parse("M0,0 A10,10 0 10 5,5");
    assert_eq!(
        compact.figures[0].segments[0],
        PathSegment::Arc {
            point: p(5.0, 5.0),
            size: Size {
                width: 10.0,
                height: 10.0
            },
            rotation_angle: 0.0,
            is_large_arc: true,
            sweep_clockwise: false,
        }
    );
    assert_eq!(
        parse("M0,0 A10,10 0 0120,20"),
        parse("M0,0 A10,10 0 0 1 20,20")
    );
}

#[test]
fn test_special_numbers() {
    let geometry = parse("M0,0 L Infinity,-Infinity H NaN");
    let segments = &geometry.figures[0].segments;
    assert_eq!(segments[0], PathSegment::Line(p(f64::INFINITY, f64::NEG_INFINITY)));
    let PathSegment::Line(point) = segments[1] else {
        panic!("expected a line, got {:?}", segments[1]);
    };
    assert!(point.x.is_nan());
    assert_eq!(point.y, f64::NEG_INFINITY);

    // Implicit repeats see the special spellings as parameters.
    assert_eq!(parse("M0,0 L1,1 Infinity,2").figures[0].segments.len(), 2);
    assert!(parse_path("Geometry", "M0,0 L inf,1").is_err());

    let bytes = GEOMETRY.encode("M -Infinity,0 L 1,Infinity").expect("encode");
    assert_eq!(
        GEOMETRY.decode(&bytes).expect("decode"),
        GEOMETRY.parse("M -Infinity,0 L 1,Infinity").expect("parse")
    );
}

#[test]
fn test_segment_after_close_starts_new_figure() {
    let geometry = parse("M0,0 L1,0 Z L0,1");
    assert_eq!(geometry.figures.len(), 2);
    assert!(geometry.figures[0].is_closed);
    assert_eq!(geometry.figures[1].start_point, p(0.0, 0.0));
    assert_eq!(geometry.figures[1].segments, vec![PathSegment::Line(p(0.0, 1.0))]);
}

#[test]
fn test_multiple_figures() {
    let geometry = parse("M0,0 L1,1 M5,5 L6,6 Z");
    assert_eq!(geometry.figures.len(), 2);
    assert!(!geometry.figures[0].is_closed);
    assert!(geometry.figures[1].is_closed);
}

#[test]
fn test_malformed_text() {
    assert_eq!(error_offset("L 1,1"), 0);
    assert_eq!(error_offset("M 0"), 3);
    assert_eq!(error_offset("M0,0 X"), 5);
    assert_eq!(error_offset("M0,0 L1,1,"), 9);
    assert!(parse_path("Geometry", "M0,0 L1,,1").is_err());
}

#[test]
fn test_empty_path() {
    assert!(parse("").figures.is_empty());
    assert!(parse("   ").figures.is_empty());
}

#[test]
fn test_codec_round_trip() {
    for text in [
        "M 0,0 L 10,0 L 10,10 Z",
        "F1 M 4,4 C 4,10 10,10 10,4 S 16,-2 16,4 Z M 20,20 h 5 v 5 h -5 z",
        "M0,0 Q 5,10 10,0 T 20,0 A 3.5,2 30 0 1 40,0",
        "M 0.000001,-1 L 3.14159265358979,2.718281828459045",
    ] {
        let bytes = GEOMETRY.encode(text).expect("encode");
        assert_eq!(
            GEOMETRY.decode(&bytes).expect("decode"),
            GEOMETRY.parse(text).expect("parse"),
            "{}",
            text
        );
    }
}

#[test]
fn test_encode_reports_conversion_error() {
    let err = GEOMETRY.encode("M 0,0 L 1").expect_err("missing y");
    assert_eq!(err.code(), ErrorCode::MalformedCodecInput);
}

#[test]
fn test_decode_rejects_bad_bytes() {
    let bad_fill = [7, 0, 0, 0, 0];
    let err = GEOMETRY.decode(&bad_fill).expect_err("fill rule");
    assert!(matches!(
        err,
        Error::Decode(DecodeError::InvalidTag { tag: 7, offset: 0 })
    ));

    let bad_segment = [0, 1, 0, 0, 0, FIGURE_FILLED, 0x01, 0x01, 1, 0, 0, 0, 9, 0x01, 0x01];
    let err = GEOMETRY.decode(&bad_segment).expect_err("segment tag");
    assert!(matches!(
        err,
        Error::Decode(DecodeError::InvalidTag { tag: 9, offset: 12 })
    ));

    let huge_count = [0, 0xFF, 0xFF, 0xFF, 0xFF];
    assert!(GEOMETRY.decode(&huge_count).is_err());
}
