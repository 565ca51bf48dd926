// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use grove_pick::{SelectionState, find_nearest};
use grove_space::Ray;
use grove_tree::{FileMeta, LayoutParams, NodeId, Tree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A full tree of the given depth: `breadth` subdirectories per directory,
/// a randomized-but-seeded file count per directory.
fn gen_tree(depth: usize, breadth: usize, max_files: usize) -> Tree {
    fn fill(
        tree: &mut Tree,
        dir: NodeId,
        depth: usize,
        breadth: usize,
        max_files: usize,
        rng: &mut Rng,
    ) {
        let n_files = (rng.next_u64() as usize) % (max_files + 1);
        for i in 0..n_files {
            tree.add_file(dir, format!("file{i}"), rng.next_u64() % 100_000, FileMeta::default());
        }
        if depth == 0 {
            return;
        }
        for i in 0..breadth {
            let sub = tree.add_dir(dir, format!("dir{i}"));
            fill(tree, sub, depth - 1, breadth, max_files, rng);
        }
    }

    let mut rng = Rng::new(0xF5_7EE_0DD_5EED);
    let mut tree = Tree::new("/");
    let root = tree.root();
    fill(&mut tree, root, depth, breadth, max_files, &mut rng);
    tree
}

/// Rays fired straight down from above random nodes, plus some misses.
fn gen_rays(tree: &Tree, count: usize) -> Vec<Ray> {
    let ids: Vec<NodeId> = tree.ids().collect();
    let mut rng = Rng::new(0xA11_0F_7B_E5);
    let mut rays = Vec::with_capacity(count);
    for i in 0..count {
        if i % 8 == 7 {
            // Empty-space query.
            rays.push(Ray::new(
                DVec3::new(1e6, 50.0, 1e6),
                DVec3::new(0.0, -1.0, 0.0),
            ));
            continue;
        }
        let id = ids[(rng.next_u64() as usize) % ids.len()];
        let jitter = DVec3::new(rng.next_f64() - 0.5, 0.0, rng.next_f64() - 0.5) * 0.1;
        let origin = tree.position(id) + jitter + DVec3::new(0.0, 50.0, 0.0);
        rays.push(Ray::new(origin, DVec3::new(0.0, -1.0, 0.0)));
    }
    rays
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let params = LayoutParams::default();
    for &(depth, breadth, max_files) in &[(3usize, 4usize, 8usize), (4, 4, 12), (5, 3, 20)] {
        let proto = gen_tree(depth, breadth, max_files);
        group.throughput(Throughput::Elements(proto.node_count() as u64));
        group.bench_function(
            format!("d{}_b{}_n{}", depth, breadth, proto.node_count()),
            |b| {
                b.iter_batched(
                    || proto.clone(),
                    |mut tree| {
                        tree.layout(&params);
                        black_box(tree.position(tree.root()));
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    let params = LayoutParams::default();
    for &(depth, breadth, max_files) in &[(3usize, 4usize, 8usize), (4, 4, 12)] {
        let mut tree = gen_tree(depth, breadth, max_files);
        tree.layout(&params);
        let rays = gen_rays(&tree, 256);
        group.throughput(Throughput::Elements(rays.len() as u64));
        group.bench_function(
            format!("find_nearest_d{}_b{}_n{}", depth, breadth, tree.node_count()),
            |b| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for ray in &rays {
                        if find_nearest(&tree, ray).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits);
                })
            },
        );
    }

    // Full pick-with-selection cycle, as driven by pointer motion.
    let mut tree = gen_tree(3, 4, 8);
    tree.layout(&params);
    let rays = gen_rays(&tree, 256);
    group.throughput(Throughput::Elements(rays.len() as u64));
    group.bench_function("selection_cycle", |b| {
        b.iter(|| {
            let mut sel = SelectionState::new();
            let mut changes = 0usize;
            for ray in &rays {
                if sel.pick(&mut tree, ray) {
                    changes += 1;
                }
            }
            sel.clear(&mut tree);
            black_box(changes);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_pick);
criterion_main!(benches);
