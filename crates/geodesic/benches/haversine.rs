#![allow(missing_docs)]

use criterion::*;
use rand::prelude::*;

use geodesic::{haversine, LatLon};

/// Generates `n` random coordinate pairs.
fn gen_coords(n: usize) -> Vec<(LatLon, LatLon)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            (
                LatLon::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)),
                LatLon::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)),
            )
        })
        .collect()
}

fn haversine_pairs(c: &mut Criterion) {
    let pairs = gen_coords(100_000);

    let mut group = c.benchmark_group("Haversine");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("pairs", |b| {
        b.iter(|| {
            black_box(
                pairs
                    .iter()
                    .map(|&(a, q)| haversine(a, q))
                    .fold(0.0, f64::max),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, haversine_pairs);
criterion_main!(benches);
