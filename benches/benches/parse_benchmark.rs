//! Parser and request builder benchmarks.
//!
//! Run with: `cargo bench --package vantage-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vantage_bench::{PayloadConfig, synthetic_payload, synthetic_text};
use vantage_lib::prelude::*;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &rows in SIZES {
        group.throughput(Throughput::Elements(rows as u64));

        for adjusted in [false, true] {
            let label = if adjusted { "adjusted" } else { "raw" };
            let payload = synthetic_payload(PayloadConfig {
                rows,
                adjusted,
                intraday: false,
            });
            let parser = TimeSeriesParser::new(adjusted);
            group.bench_with_input(BenchmarkId::new(label, rows), &payload, |b, payload| {
                b.iter(|| parser.parse(black_box(payload)));
            });
        }

        let text = synthetic_text(PayloadConfig {
            rows,
            adjusted: false,
            intraday: true,
        });
        let parser = TimeSeriesParser::new(false);
        group.bench_with_input(BenchmarkId::new("text-intraday", rows), &text, |b, text| {
            b.iter(|| parser.parse_str(black_box(text)));
        });
    }

    group.finish();
}

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("build/stochrsi", |b| {
        b.iter(|| {
            IndicatorBuilder::new(IndicatorKind::StochRsi, black_box("IBM"))
                .interval(Interval::Weekly)
                .time_period(10)
                .series_type(SeriesType::Close)
                .build()
                .map(|request| request.query_string())
        });
    });
}

criterion_group!(benches, parse_benchmark, build_benchmark);
criterion_main!(benches);
