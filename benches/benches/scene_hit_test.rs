// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use phonestack_scene::{LocalElement, QueryFilter, Scene};

/// `n` × `n` containers, each holding three full-size cards.
fn gen_grid_scene(n: usize, cell: f64) -> Scene {
    let mut scene = Scene::new();
    let page = scene.insert(
        None,
        LocalElement {
            local_bounds: Rect::new(0.0, 0.0, n as f64 * cell, n as f64 * cell),
            ..Default::default()
        },
    );
    for y in 0..n {
        for x in 0..n {
            let bounds = Rect::new(0.0, 0.0, cell, cell);
            let container = scene.insert(
                Some(page),
                LocalElement {
                    local_bounds: bounds,
                    local_transform: kurbo::Affine::translate((x as f64 * cell, y as f64 * cell)),
                    ..Default::default()
                },
            );
            for z in 1..=3 {
                scene.insert(
                    Some(container),
                    LocalElement {
                        local_bounds: bounds,
                        z_index: z,
                        ..Default::default()
                    },
                );
            }
        }
    }
    scene
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_hit_test");
    for n in [4_usize, 16, 32] {
        let cell = 100.0;
        let scene = gen_grid_scene(n, cell);
        let extent = n as f64 * cell;
        let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
        let points: Vec<Point> = (0..256)
            .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("top_hit_{n}x{n}"), |b| {
            b.iter(|| {
                for pt in &points {
                    black_box(scene.hit_test_point(*pt, QueryFilter::POINTER));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
