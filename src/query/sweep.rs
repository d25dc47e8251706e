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

// Swept (continuous) tests: the slab-method segment sweep, the box sweep
// built on top of it, and the multi-target reduction.

use noisy_float::prelude::*;

use crate::geom::{v2, Aabb, Card, Vec2};
use crate::query::{intersect_aabb, Hit, Sweep, TIME_FACTOR};

/// Sweeps the segment `origin + t * delta`, `t` in `[0, 1]`, against
/// `aabb` grown by `border` on every side, and reports the first entry.
///
/// Growing the box by the mover's half-extents reduces a moving box to a
/// moving point, which is how [`swept_aabb`] uses this.
///
/// On a hit, `time` is the entry time clamped to `[0, 1]`, `normal` is
/// the face struck first (pointing against the direction of travel),
/// `pos` is the point reached at `time`, and `delta` is the negated
/// remainder of the displacement.
pub fn intersect_segment(aabb: &Aabb, origin: Vec2, delta: Vec2, border: Vec2) -> Option<Hit> {
    // A stationary axis divides by zero on purpose: IEEE infinities make
    // that axis's crossing times degenerate, dropping it from the
    // interval comparisons below.
    let scale = v2(1.0 / delta.x, 1.0 / delta.y);
    let sign = scale.signum();
    let reach = aabb.half_extents + border;

    let near_x = (aabb.center.x - sign.x * reach.x - origin.x) * scale.x;
    let near_y = (aabb.center.y - sign.y * reach.y - origin.y) * scale.y;
    let far_x = (aabb.center.x + sign.x * reach.x - origin.x) * scale.x;
    let far_y = (aabb.center.y + sign.y * reach.y - origin.y) * scale.y;

    // Entry on one axis after exit on the other means the per-axis time
    // intervals never overlap.
    if near_x > far_y || near_y > far_x {
        return None;
    }
    let near = near_x.max(near_y);
    let far = far_x.min(far_y);
    if near > 1.0 || far < 0.0 {
        return None;
    }

    let time = near.clamp(0.0, 1.0);
    // The axis with the later entry is the face the segment struck.
    let card = if near_x > near_y {
        Card::from_x_sign(-sign.x)
    } else {
        Card::from_y_sign(-sign.y)
    };
    Some(Hit {
        pos: origin + delta * time,
        delta: -delta * (1.0 - time),
        normal: card.into(),
        time,
    })
}

/// Sweeps `mover` along `delta` against a single stationary `target`.
///
/// A displacement of near-zero length degenerates to the static overlap
/// test; otherwise the mover's center is swept as a segment against the
/// target expanded by the mover's half-extents. Resolved motion is
/// scaled by [`TIME_FACTOR`] so the mover stops just short of contact.
pub fn swept_aabb(mover: &Aabb, target: &Aabb, delta: Vec2) -> Sweep {
    if delta.len() <= f32::EPSILON {
        // Arguments to the static test are reversed so the contact
        // convention reads as a hit on the mover.
        let hit = intersect_aabb(target, mover);
        let time = if hit.is_some() { 0.0 } else { 1.0 };
        return Sweep {
            hit,
            pos: mover.center,
            time,
        };
    }
    match intersect_segment(target, mover.center, delta, mover.half_extents) {
        Some(mut hit) => {
            let time = hit.time.clamp(0.0, 1.0);
            let pos = mover.center + delta * (time * TIME_FACTOR);
            // Push the contact point out to the mover's leading edge and
            // pin it onto the target's surface.
            let direction = delta.normalize_or_zero();
            let lead = v2(
                direction.x * mover.half_extents.x,
                direction.y * mover.half_extents.y,
            );
            hit.pos = (hit.pos + lead).clamp(target.min_corner(), target.max_corner());
            Sweep {
                hit: Some(hit),
                pos,
                time,
            }
        }
        None => Sweep {
            hit: None,
            pos: mover.center + delta * TIME_FACTOR,
            time: TIME_FACTOR,
        },
    }
}

/// Sweeps `mover` along `delta` against every box in `targets` and
/// returns the earliest contact, or the unobstructed sweep if none of
/// the targets is in the way.
///
/// Candidates are expected to come pre-filtered from a broad phase; no
/// spatial acceleration happens here. On an exact tie in time of impact
/// the earliest-seen candidate is kept, so the result depends on the
/// order of `targets`.
pub fn closest_swept_aabb(mover: &Aabb, targets: &[Aabb], delta: Vec2) -> Sweep {
    let mut nearest = Sweep {
        hit: None,
        pos: mover.center + delta,
        time: TIME_FACTOR,
    };
    for target in targets {
        let sweep = swept_aabb(mover, target, delta);
        if n32(sweep.time) < n32(nearest.time) {
            nearest = sweep;
        }
    }
    nearest
}
