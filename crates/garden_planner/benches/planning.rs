mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use garden_planner::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const GARDEN_SIDES: [f32; 4] = [8.0, 16.0, 32.0, 64.0];

fn planning_hex_grid_benches(c: &mut Criterion) {
    for (label, config) in [
        ("strict", PlannerConfig::strict()),
        ("defensive", PlannerConfig::defensive()),
    ] {
        let mut group = c.benchmark_group(format!("planning/hex_grid/{label}"));

        for &side in &GARDEN_SIDES {
            let garden = Plot::new(side, side);
            let count = (side * side) as usize;
            let partition = SpeciesPartition::from_varieties(&common::varieties(count));
            let expected = plan_hex_grid(&garden, &partition, &config, &mut ())
                .map(|p| p.len())
                .unwrap_or(0);
            group.throughput(common::elements_throughput(expected));

            group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
                b.iter(|| {
                    let placements = plan_hex_grid(&garden, &partition, &config, &mut ());
                    black_box(placements.map(|p| p.len()).unwrap_or(0));
                });
            });
        }

        group.finish();
    }
}

fn planning_fallback_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning/random_fallback");

    for &side in &GARDEN_SIDES {
        let garden = Plot::new(side, side);
        let input = common::varieties((side * side) as usize);
        group.throughput(common::elements_throughput(input.len()));
        let mut rng = StdRng::seed_from_u64(0xC0FFEEu64 ^ (side as u64));

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let placements = plan_random(&garden, &input, &mut rng);
                black_box(placements.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = planning_hex_grid_benches, planning_fallback_benches
}
criterion_main!(benches);
