#![allow(missing_docs)]

use criterion::*;
use rand::prelude::*;

use geodesic::LatLon;
use nearsite::{nearest_k, par_rank_batch, rank_batch, QuerySite, ReferenceSite};

/// Random sites with ids `S0..Sn`, reproducible from `seed`.
fn random_catalog(n: usize, seed: u64) -> Vec<ReferenceSite> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let lat = rng.gen_range(-90.0..=90.0);
            let lon = rng.gen_range(-180.0..=180.0);
            ReferenceSite::new(&format!("S{i}"), "", LatLon::new(lat, lon))
        })
        .collect()
}

fn bench_nearest_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("NearestK");

    for n in [100, 1_000, 10_000] {
        let catalog = random_catalog(n, 42);
        let query = QuerySite::new("Q", "", LatLon::new(0.0, 0.0));

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("single", n), &catalog, |b, catalog| {
            b.iter(|| nearest_k(black_box(&query), black_box(catalog), 3));
        });
    }

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("RankBatch");

    let catalog = random_catalog(1_000, 42);
    let queries = random_catalog(100, 43)
        .into_iter()
        .map(|site| QuerySite::new(&site.id, "", site.coords))
        .collect::<Vec<_>>();

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| rank_batch(black_box(&queries), black_box(&catalog), 3));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| par_rank_batch(black_box(&queries), black_box(&catalog), 3));
    });

    group.finish();
}

criterion_group!(benches, bench_nearest_k, bench_batches);
criterion_main!(benches);
