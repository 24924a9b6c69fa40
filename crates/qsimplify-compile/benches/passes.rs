//! Benchmarks for qsimplify rewrite passes and the optimizer
//!
//! Run with: cargo bench -p qsimplify-compile

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsimplify_compile::{OptimizerBuilder, PassId};
use qsimplify_gen::random_circuit_with_rng;
use qsimplify_ir::Circuit;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn circuit(n_qubits: u32, n_templates: usize) -> Circuit {
    let mut rng = SmallRng::seed_from_u64(2024);
    random_circuit_with_rng(n_qubits, n_templates, &mut rng).unwrap()
}

/// Benchmark each pass on growing random circuits
fn bench_passes(c: &mut Criterion) {
    for id in PassId::ALL {
        let mut group = c.benchmark_group(id.name());
        for n_templates in &[10, 50, 200] {
            let input = circuit(8, *n_templates);
            group.bench_with_input(
                BenchmarkId::new("templates", n_templates),
                &input,
                |b, input| {
                    b.iter(|| id.run(black_box(input)).unwrap());
                },
            );
        }
        group.finish();
    }
}

/// Benchmark the optimizer, sequential against parallel trajectories
fn bench_optimizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizer");
    group.sample_size(10);
    let input = circuit(6, 40);

    for parallel in [false, true] {
        let optimizer = OptimizerBuilder::new()
            .with_iterations(30)
            .with_restarts(8)
            .with_seed(1)
            .with_parallel(parallel)
            .build()
            .unwrap();
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| optimizer.run(black_box(&input)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_passes, bench_optimizer);
criterion_main!(benches);
