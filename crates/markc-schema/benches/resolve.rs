// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Lookup and codec benchmarks.
//!
//! Measures the hot paths a compiler hits once per attribute:
//! - identifier -> handle in both deployment modes
//! - property resolution with an ancestor walk
//! - converter selection
//! - point list and path encode/decode

#![allow(clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use markc_schema::{HostModules, KnownElement, RegistryConfig, SymbolRegistry};

fn bench_resolve_type(c: &mut Criterion) {
    let runtime = SymbolRegistry::runtime();
    let config = RegistryConfig::build_time();
    let modules = HostModules::from_schema(&config.modules);
    let build_time = SymbolRegistry::with_modules(config, modules).expect("registry");

    let mut group = c.benchmark_group("resolve_type");
    for (label, registry) in [("runtime", &runtime), ("build_time", &build_time)] {
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                registry
                    .resolve_type(black_box(KnownElement::Button.as_i16()))
                    .expect("Button")
            });
        });
    }
    group.finish();
}

fn bench_resolve_property(c: &mut Criterion) {
    let registry = SymbolRegistry::runtime();
    c.bench_function("resolve_property_inherited", |b| {
        b.iter(|| registry.resolve_property_id(black_box(KnownElement::ToggleButton), "Margin"));
    });
    c.bench_function("converter_for_member", |b| {
        b.iter(|| {
            registry.converter_for_member(
                black_box(KnownElement::Button),
                black_box("Width"),
                KnownElement::Double,
            )
        });
    });
}

fn bench_codecs(c: &mut Criterion) {
    let registry = SymbolRegistry::runtime();
    let points = (0..256)
        .map(|i| format!("{},{}", i, i * 2))
        .collect::<Vec<_>>()
        .join(" ");
    let path = "M 10,10 C 20,20 30,30 40,10 S 60,0 70,10 L 80,80 A 5,5 0 0 1 90,90 Z";

    let mut group = c.benchmark_group("codec");
    for (element, text) in [
        (KnownElement::PointCollection, points.as_str()),
        (KnownElement::Geometry, path),
    ] {
        let codec = registry.codec_for(element).expect("codec");
        let bytes = codec.encode(text).expect("encode");
        group.bench_function(BenchmarkId::new("encode", codec.name()), |b| {
            b.iter(|| codec.encode(black_box(text)).expect("encode"));
        });
        group.bench_function(BenchmarkId::new("decode", codec.name()), |b| {
            b.iter(|| codec.decode(black_box(&bytes)).expect("decode"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve_type, bench_resolve_property, bench_codecs);
criterion_main!(benches);
