//! Criterion benchmarks for boundary tracing and full vectorization.
//! Focus sizes: blob grids of 16, 64 and 256 pixels per side, plus solid
//! rectangles with one run per line.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rlepoly::rle::rand::{draw_blob, BlobCfg, ReplayToken};
use rlepoly::rle::{LabelObject, Run, RunStore};
use rlepoly::trace::{trace_store, Connectivity, TraceCfg};
use rlepoly::{vectorize_with, VectorizeCfg};

fn blob_cfg(side: usize) -> BlobCfg {
    BlobCfg {
        width: side,
        height: side,
        steps: side * side / 2,
        walkers: 4,
    }
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    for &side in &[16usize, 64, 256] {
        let obj = draw_blob(blob_cfg(side), ReplayToken { seed: 42, index: 0 });
        let store = obj.store();
        for conn in [Connectivity::Eight, Connectivity::Four] {
            let cfg = TraceCfg {
                connectivity: conn,
                max_steps: None,
            };
            group.bench_with_input(
                BenchmarkId::new(format!("blob_{conn:?}"), side),
                &store,
                |b, store| b.iter(|| trace_store(store, cfg)),
            );
        }
        let rect: Vec<Run> = (0..side as i64).map(|l| Run::new(l, 0, side as i64)).collect();
        group.bench_with_input(BenchmarkId::new("rectangle", side), &rect, |b, rect| {
            b.iter_batched(
                || RunStore::from_runs(rect.iter().copied()),
                |store| {
                    let _ = trace_store(&store, TraceCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");
    let cfg = VectorizeCfg {
        spacing: nalgebra::Vector2::new(0.5, -0.5),
        simplify_tol: Some(0.3),
        ..VectorizeCfg::default()
    };
    for &side in &[16usize, 64] {
        group.bench_with_input(BenchmarkId::new("blob_simplified", side), &side, |b, &side| {
            b.iter_batched(
                || -> LabelObject { draw_blob(blob_cfg(side), ReplayToken { seed: 7, index: 3 }) },
                |obj| {
                    let _ = vectorize_with(&obj, &cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_trace, bench_vectorize);
criterion_main!(benches);
