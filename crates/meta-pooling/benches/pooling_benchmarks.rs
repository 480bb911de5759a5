use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meta_core::StudyInput;
use meta_effect::{EffectSizeEstimator, HedgesG, MeanDifference};
use meta_pooling::{compare_arms, ArmCohort, FixedEffects};
use rand::prelude::*;

/// Generate plausible two-arm study summaries
fn generate_studies(k: usize, seed: u64) -> Vec<StudyInput> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|i| {
            let n_c = rng.gen_range(8..120);
            let n_t = rng.gen_range(8..120);
            let mean_c = rng.gen_range(1.0..60.0);
            let shift = rng.gen_range(-5.0..5.0);
            StudyInput::new(
                format!("Study {}", i + 1),
                (n_c, mean_c, rng.gen_range(0.2..12.0)),
                (n_t, mean_c + shift, rng.gen_range(0.2..12.0)),
            )
        })
        .collect()
}

fn bench_effect_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("EffectSizes");
    let hedges = HedgesG::new();
    let md = MeanDifference::new();

    for &k in &[5usize, 50, 500] {
        let studies = generate_studies(k, 42);

        group.bench_with_input(BenchmarkId::new("hedges_g", k), &studies, |b, studies| {
            b.iter(|| hedges.compute_all(black_box(studies)))
        });
        group.bench_with_input(
            BenchmarkId::new("mean_difference", k),
            &studies,
            |b, studies| b.iter(|| md.compute_all(black_box(studies))),
        );
    }

    group.finish();
}

fn bench_fixed_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("FixedEffects");
    let pooler = FixedEffects::new();

    for &k in &[5usize, 50, 500, 5000] {
        let results = HedgesG::new()
            .compute_all(&generate_studies(k, 7))
            .expect("generated studies are valid");

        group.bench_with_input(BenchmarkId::new("aggregate", k), &results, |b, results| {
            b.iter(|| pooler.aggregate(black_box(results)))
        });
    }

    group.finish();
}

fn bench_arm_pooling(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut cohorts = |count: usize| -> Vec<ArmCohort> {
        (0..count)
            .map(|_| {
                ArmCohort::new(
                    rng.gen_range(10..100),
                    rng.gen_range(20.0..30.0),
                    rng.gen_range(1.0..4.0),
                )
            })
            .collect()
    };
    let control = cohorts(4);
    let treatment = cohorts(6);

    c.bench_function("compare_arms", |b| {
        b.iter(|| compare_arms(black_box(&control), black_box(&treatment)))
    });
}

criterion_group!(
    benches,
    bench_effect_sizes,
    bench_fixed_effects,
    bench_arm_pooling
);
criterion_main!(benches);
