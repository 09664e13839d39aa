// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Benchmarks for both kernels at their standard sizes.
//!
//! Run with: cargo bench

#[macro_use]
extern crate criterion;
extern crate asciibrot;

use asciibrot::arith::{INNER, OUTER};
use asciibrot::{arithmetic_loop, evaluate, AsciiRenderer, GridParams};
use criterion::{black_box, Criterion};
use num::Complex;

fn arithmetic(c: &mut Criterion) {
    c.bench_function("arithmetic loop 10000x1000", |b| {
        b.iter(|| arithmetic_loop(black_box(OUTER), black_box(INNER)))
    });
}

fn single_point(c: &mut Criterion) {
    // Inside the set, so every call runs the full 1000 iterations.
    c.bench_function("evaluate origin", |b| {
        b.iter(|| evaluate(1000, 1000.0, black_box(Complex::new(0.0, 0.0))))
    });
}

fn mandelbrot(c: &mut Criterion) {
    let renderer = AsciiRenderer::new(&GridParams::default()).unwrap();
    c.bench_function("render 200x100", move |b| b.iter(|| renderer.lines()));

    let small = AsciiRenderer::new(&GridParams {
        stepsx: 180,
        stepsy: 90,
        ..GridParams::default()
    })
    .unwrap();
    c.bench_function("checksum 180x90", move |b| b.iter(|| small.checksum()));
}

criterion_group!(benches, arithmetic, single_point, mandelbrot);
criterion_main!(benches);
