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

//! Boxsweep is a library of discrete and swept (continuous) collision
//! queries between 2D axis-aligned boxes, points, and circles, meant to
//! sit under a movement or physics system.
//!
//! The entry point for movement resolution is
//! [`closest_swept_aabb`], which sweeps a
//! moving box along a displacement against a list of candidate obstacles
//! and reports the earliest contact, its axis-aligned normal, and the
//! position the mover is allowed to reach. The candidates are expected
//! to come pre-filtered from a broad phase; this crate does no spatial
//! indexing of its own.
//!
//! All queries are pure functions over value types. There is no shared
//! or mutable state, so any query may be invoked concurrently from any
//! number of threads.
//!
//! # Example
//!
//! ```
//! use boxsweep::geom::{v2, Aabb};
//! use boxsweep::closest_swept_aabb;
//!
//! let player = Aabb::new(v2(0.0, 0.0), v2(0.5, 0.5));
//! let walls = [Aabb::new(v2(5.0, 0.0), v2(0.5, 0.5))];
//! let sweep = closest_swept_aabb(&player, &walls, v2(10.0, 0.0));
//!
//! let hit = sweep.hit.expect("the wall is in the way");
//! assert_eq!(hit.normal, v2(-1.0, 0.0));
//! assert!(sweep.pos.x < 4.0);
//! ```

pub mod geom;
mod query;

pub use crate::query::{
    closest_swept_aabb, intersect_aabb, intersect_point, intersect_segment, overlap_circle,
    separation_circle, swept_aabb, Hit, Sweep, TIME_FACTOR,
};
