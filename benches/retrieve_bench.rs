//! Benchmark for `retrieve` performance
//!
//! Builds a quadtree over 100k randomly placed boxes in a 800x800 domain and
//! measures retrieval with query boxes of decreasing size. Reports the
//! average candidate count next to the timing, since retrieval returns a
//! superset of the overlapping boxes.

use quadindex::{BoundingRect, QuadTree, QuadTreeConfig};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

const DOMAIN: f64 = 800.0;

/// Random box with variable size UP TO `max_size`
fn random_box<R: Rng>(rng: &mut R, max_size: f64) -> BoundingRect {
    let x = rng.random_range(0.0..(DOMAIN - max_size));
    let y = rng.random_range(0.0..(DOMAIN - max_size));
    let width = rng.random_range(0.0..max_size);
    let height = rng.random_range(0.0..max_size);
    BoundingRect::new(x, y, width, height)
}

fn bench_retrieve(tree: &QuadTree<usize>, queries: &[BoundingRect], percentage_str: &str) {
    let mut results = Vec::new();
    let mut candidates = 0usize;
    let start = Instant::now();

    for query in queries {
        results.clear();
        tree.retrieve(query, &mut results);
        candidates += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} retrievals {}%: {:.2}ms, {} candidates avg",
        queries.len(),
        percentage_str,
        elapsed.as_secs_f64() * 1000.0,
        candidates / queries.len().max(1)
    );
}

fn main() {
    println!("Quadtree Retrieve Benchmark");
    println!("===========================\n");

    let num_items = 100_000;
    let num_tests = 1_000;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let boxes: Vec<_> = (0..num_items).map(|_| random_box(&mut rng, 8.0)).collect();

    let side_for = |coverage: f64| coverage.sqrt() * DOMAIN;
    let mut queries_50 = Vec::new();
    let mut queries_10 = Vec::new();
    let mut queries_1 = Vec::new();
    let mut queries_001 = Vec::new();
    for _ in 0..num_tests {
        queries_50.push(random_box(&mut rng, side_for(0.5)));
        queries_10.push(random_box(&mut rng, side_for(0.1)));
        queries_1.push(random_box(&mut rng, side_for(0.01)));
        queries_001.push(random_box(&mut rng, side_for(0.0001)));
    }

    for max_objects in [2, 8, 32] {
        let config = QuadTreeConfig::default().with_max_levels(10).with_max_objects(max_objects);
        let domain = BoundingRect::new(0.0, 0.0, DOMAIN, DOMAIN);
        let mut tree = QuadTree::with_config(config, domain).expect("valid domain");

        let start = Instant::now();
        for (i, rect) in boxes.iter().enumerate() {
            tree.insert(i, *rect).expect("valid box");
        }
        println!(
            "max_objects={}: built {} items in {:.2}ms, {} nodes, depth {}",
            max_objects,
            num_items,
            start.elapsed().as_secs_f64() * 1000.0,
            tree.node_count(),
            tree.depth()
        );

        let full = vec![domain; 10];
        bench_retrieve(&tree, &full, "100");
        bench_retrieve(&tree, &queries_50, "50");
        bench_retrieve(&tree, &queries_10, "10");
        bench_retrieve(&tree, &queries_1, "1");
        bench_retrieve(&tree, &queries_001, "0.01");
        println!();
    }
}

/*
cargo bench --bench retrieve_bench
*/
