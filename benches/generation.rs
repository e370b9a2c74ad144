use criterion::{criterion_group, criterion_main, Criterion, black_box};

use bonsai::voxel::adjacency::touching_count;
use bonsai::voxel::procgen::{BonsaiGenerator, BonsaiParams, SeededRng};

fn bench_generate_classic(c: &mut Criterion) {
    let generator = BonsaiGenerator::with_params(BonsaiParams::classic());

    c.bench_function("generate_classic", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = SeededRng::from_seed_u64(black_box(seed));
            generator.generate(&mut rng)
        });
    });
}

fn bench_generate_guarded(c: &mut Criterion) {
    let generator = BonsaiGenerator::with_params(BonsaiParams::guarded());

    c.bench_function("generate_guarded", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = SeededRng::from_seed_u64(black_box(seed));
            generator.generate(&mut rng)
        });
    });
}

fn bench_generate_six_tiers(c: &mut Criterion) {
    let params = BonsaiParams {
        tiers: 6,
        ..BonsaiParams::classic()
    };
    let generator = BonsaiGenerator::with_params(params);

    c.bench_function("generate_six_tiers", |b| {
        let mut rng = SeededRng::from_seed_u64(7);
        b.iter(|| generator.generate(black_box(&mut rng)));
    });
}

fn bench_touching_count_linear(c: &mut Criterion) {
    let mut rng = SeededRng::from_seed_u64(42);
    let tree = BonsaiGenerator::new()
        .generate(&mut rng)
        .expect("classic params are valid");
    let probe = tree.branches.last().copied().unwrap_or_default();

    c.bench_function("touching_count_linear_scan", |b| {
        b.iter(|| touching_count(black_box(&tree.branches), black_box(probe)));
    });
}

criterion_group!(
    benches,
    bench_generate_classic,
    bench_generate_guarded,
    bench_generate_six_tiers,
    bench_touching_count_linear,
);
criterion_main!(benches);
