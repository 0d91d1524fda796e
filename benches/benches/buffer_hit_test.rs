// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chipline_buffer::{ChipBuffer, MonospaceLayout, TextRange, Viewport};
use chipline_span::ChipSpan;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

/// One chip every `stride` characters, each `width` characters wide.
fn populate(n: usize, stride: usize, width: usize) -> ChipBuffer {
    let mut buf = ChipBuffer::new();
    for i in 0..n {
        let start = i * stride;
        buf.attach(TextRange::new(start, start + width), ChipSpan::new("chip"));
    }
    buf
}

fn layout_for(len: usize) -> MonospaceLayout {
    MonospaceLayout {
        char_width: 8.0,
        line_height: 18.0,
        line_len: 80,
        len,
    }
}

fn bench_offset_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("chip_at_offset");
    for &n in &[16usize, 128, 1024] {
        let buf = populate(n, 8, 4);
        let max_offset = n * 8;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("chips_{n}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                let mut offset = 0;
                while offset < max_offset {
                    if buf.chip_at_offset(black_box(offset)).is_some() {
                        hits += 1;
                    }
                    offset += 3;
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_point_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("chip_at_point");
    for &n in &[16usize, 128, 1024] {
        let buf = populate(n, 8, 4);
        let layout = layout_for(n * 8);
        let view = Viewport::default();
        group.throughput(Throughput::Elements(256));
        group.bench_function(format!("chips_{n}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for i in 0..256 {
                    let pt = Point::new((i % 80) as f64 * 8.0 + 3.0, (i / 80) as f64 * 18.0 + 5.0);
                    if buf.chip_at_point(Some(&layout), &view, black_box(pt)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_attach_detach(c: &mut Criterion) {
    let mut group = c.benchmark_group("attach_detach");
    for &n in &[128usize, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("churn_{n}"), |b| {
            b.iter_batched(
                ChipBuffer::new,
                |mut buf| {
                    let mut ids = Vec::with_capacity(n);
                    for i in 0..n {
                        let start = i * 8;
                        ids.push(buf.attach(TextRange::new(start, start + 4), ChipSpan::new("chip")));
                    }
                    // Detach every other chip, then refill the freed slots.
                    for id in ids.iter().step_by(2) {
                        buf.detach(*id);
                    }
                    for i in 0..n / 2 {
                        let start = i * 16;
                        buf.attach(TextRange::new(start, start + 4), ChipSpan::new("chip"));
                    }
                    black_box(buf.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_offset_query,
    bench_point_query,
    bench_attach_detach
);
criterion_main!(benches);
