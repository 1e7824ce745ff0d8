use criterion::{criterion_group, criterion_main, Criterion};
use kd_nearest::kdtree::{KDTree, KDTreeIndex};
use kd_nearest::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

fn load_data(rng: &mut StdRng, n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|_| [rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0)])
        .collect()
}

fn construct_kdtree(coords: &[[f64; 2]]) -> KDTree<f64, 2> {
    KDTree::from_points(coords.iter().copied().map(Point::new))
}

fn construct_rstar(coords: Vec<[f64; 2]>) -> RTree<[f64; 2]> {
    RTree::bulk_load(coords)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let coords = load_data(&mut rng, 100_000);
    let queries = load_data(&mut rng, 1_000);

    c.bench_function("construction (kdtree)", |b| {
        b.iter(|| construct_kdtree(&coords))
    });

    c.bench_function("construction (rstar bulk)", |b| {
        b.iter(|| construct_rstar(coords.to_vec()))
    });

    let kdtree = construct_kdtree(&coords);
    let rstar_tree = construct_rstar(coords.to_vec());
    let query_points: Vec<Point<f64, 2>> = queries.iter().copied().map(Point::new).collect();

    c.bench_function("nearest (kdtree)", |b| {
        b.iter(|| {
            for query in query_points.iter() {
                let _ = kdtree.nearest(query);
            }
        })
    });

    c.bench_function("nearest iterative (kdtree)", |b| {
        b.iter(|| {
            for query in query_points.iter() {
                let _ = kdtree.nearest_iterative(query);
            }
        })
    });

    c.bench_function("nearest batch (kdtree)", |b| {
        b.iter(|| kdtree.nearest_batch(&query_points))
    });

    c.bench_function("nearest (rstar)", |b| {
        b.iter(|| {
            for query in queries.iter() {
                let _ = rstar_tree.nearest_neighbor(query);
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
