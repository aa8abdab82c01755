// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleave_core::geometry::point::Point;
use cleave_solver::{solve_closest_pair, solve_karatsuba};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn random_points(rng: &mut ChaCha8Rng, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect()
}

fn random_digits(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn bench_closest_pair(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut group = c.benchmark_group("closest_pair");

    for n in [64usize, 512, 4096] {
        let points = random_points(&mut rng, n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let (result, trace) =
                    solve_closest_pair(black_box(points)).expect("benchmark input is valid");
                black_box((result, trace.len()))
            })
        });
    }
    group.finish();
}

fn bench_karatsuba(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut group = c.benchmark_group("karatsuba");

    for digits in [32usize, 256, 1024] {
        let x = random_digits(&mut rng, digits);
        let y = random_digits(&mut rng, digits);
        group.throughput(Throughput::Elements(digits as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            &(x, y),
            |b, (x, y)| {
                b.iter(|| {
                    let (result, trace) =
                        solve_karatsuba(black_box(x), black_box(y)).expect("operands are digits");
                    black_box((result, trace.len()))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_closest_pair, bench_karatsuba);
criterion_main!(benches);
