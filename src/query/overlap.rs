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

// Static (zero-motion) tests: circle vs. box, point vs. box, and the
// Minkowski-sum box vs. box penetration test.

use crate::geom::{v2, Aabb, Card, Vec2};
use crate::query::Hit;

/// Returns the signed distance between the surface of `aabb` and the
/// circle at `center` with radius `radius`. Negative means overlapping.
pub fn separation_circle(aabb: &Aabb, center: Vec2, radius: f32) -> f32 {
    let edge_diff = (center - aabb.center).abs() - aabb.half_extents;
    // First term covers a circle center inside the box (non-positive),
    // second is the Euclidean distance to the nearest edge point outside.
    edge_diff.x.max(edge_diff.y).min(0.0) + edge_diff.max(Vec2::ZERO).len() - radius
}

/// Returns `true` if the circle at `center` with radius `radius` touches
/// or overlaps `aabb`.
pub fn overlap_circle(aabb: &Aabb, center: Vec2, radius: f32) -> bool {
    separation_circle(aabb, center, radius) <= 0.0
}

/// Tests `point` for containment in `aabb`.
///
/// On a hit, the contact resolves along the axis of shallowest
/// penetration: `normal` and `delta` push the point out through the
/// nearest face, and `pos` is the point snapped to that face. The x-axis
/// wins when both penetrations are equal.
pub fn intersect_point(aabb: &Aabb, point: Vec2) -> Option<Hit> {
    let diff = point - aabb.center;
    let pen = aabb.half_extents - diff.abs();
    if pen.x < 0.0 || pen.y < 0.0 {
        return None;
    }
    if pen.y < pen.x {
        let sign = diff.y.signum();
        Some(Hit {
            pos: v2(point.x, aabb.center.y + aabb.half_extents.y * sign),
            delta: v2(0.0, pen.y * sign),
            normal: Card::from_y_sign(sign).into(),
            time: 0.0,
        })
    } else {
        let sign = diff.x.signum();
        Some(Hit {
            pos: v2(aabb.center.x + aabb.half_extents.x * sign, point.y),
            delta: v2(pen.x * sign, 0.0),
            normal: Card::from_x_sign(sign).into(),
            time: 0.0,
        })
    }
}

/// Tests boxes `a` and `b` for static overlap.
///
/// The per-axis penetration is the Minkowski sum of half-extents minus
/// the center distance; either axis separating means no hit. Resolution
/// follows the shallowest axis, translating `a`'s reference point by the
/// signed penetration. By convention the contact `pos` takes the
/// resolved coordinate from `a`'s face and the other coordinate from
/// `b`'s center, so swapping the arguments does not mirror the result.
/// Detection itself is symmetric.
pub fn intersect_aabb(a: &Aabb, b: &Aabb) -> Option<Hit> {
    let diff = b.center - a.center;
    let pen = a.half_extents + b.half_extents - diff.abs();
    if pen.x < 0.0 || pen.y < 0.0 {
        return None;
    }
    if pen.y < pen.x {
        let sign = diff.y.signum();
        Some(Hit {
            pos: v2(b.center.x, a.center.y + a.half_extents.y * sign),
            delta: v2(0.0, pen.y * sign),
            normal: Card::from_y_sign(sign).into(),
            time: 0.0,
        })
    } else {
        let sign = diff.x.signum();
        Some(Hit {
            pos: v2(a.center.x + a.half_extents.x * sign, b.center.y),
            delta: v2(pen.x * sign, 0.0),
            normal: Card::from_x_sign(sign).into(),
            time: 0.0,
        })
    }
}
