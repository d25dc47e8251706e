// Copyright 2025 the boxsweep developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boxsweep::geom::{v2, Aabb};
use boxsweep::{closest_swept_aabb, swept_aabb};

// A row of obstacle tiles in front of the mover, the shape a broad phase
// would hand over for a long horizontal move.
fn tile_row(count: usize) -> Vec<Aabb> {
    (0..count)
        .map(|i| Aabb::new(v2(2.0 + i as f32, (i % 3) as f32 - 1.0), v2(0.5, 0.5)))
        .collect()
}

fn bench_swept_aabb(c: &mut Criterion) {
    let mover = Aabb::new(v2(0.0, 0.0), v2(0.5, 0.5));
    let target = Aabb::new(v2(5.0, 0.0), v2(0.5, 0.5));
    c.bench_function("swept_aabb hit", |b| {
        b.iter(|| swept_aabb(black_box(&mover), black_box(&target), black_box(v2(10.0, 0.0))))
    });
}

fn bench_closest_swept_aabb(c: &mut Criterion) {
    let mover = Aabb::new(v2(0.0, 0.0), v2(0.5, 0.5));
    for count in [4, 64, 1024] {
        let targets = tile_row(count);
        c.bench_function(&format!("closest_swept_aabb {} targets", count), |b| {
            b.iter(|| {
                closest_swept_aabb(black_box(&mover), black_box(&targets), black_box(v2(50.0, 0.0)))
            })
        });
    }
}

criterion_group!(benches, bench_swept_aabb, bench_closest_swept_aabb);
criterion_main!(benches);
