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

use crate::geom::Vec2;

/// An axis-aligned box, described by its center and half-extents.
///
/// The box spans `[center - half_extents, center + half_extents]` on
/// each axis. Half-extents are expected to be non-negative; this is not
/// validated, and a box with negative half-extents yields meaningless
/// query results.
///
/// `Aabb` is a plain value with no identity. Queries never hold on to
/// one past the call that received it.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Aabb {
    /// The position of the center of the box.
    pub center: Vec2,
    /// The half-width and half-height of the box.
    pub half_extents: Vec2,
}

impl Aabb {
    /// Constructs a new `Aabb` with the given `center` and `half_extents`.
    #[inline]
    pub fn new(center: Vec2, half_extents: Vec2) -> Aabb {
        Aabb { center, half_extents }
    }

    /// Constructs the `Aabb` spanning `min` to `max` on each axis.
    pub fn with_bounds(min: Vec2, max: Vec2) -> Aabb {
        let half_extents = (max - min) * 0.5;
        Aabb::new(min + half_extents, half_extents)
    }

    /// Returns the lowest x coordinate of the box.
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    /// Returns the highest x coordinate of the box.
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Returns the lowest y coordinate of the box.
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    /// Returns the highest y coordinate of the box.
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Returns the corner with the lowest coordinates.
    pub fn min_corner(&self) -> Vec2 {
        self.center - self.half_extents
    }

    /// Returns the corner with the highest coordinates.
    pub fn max_corner(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Returns the box grown by `border` on every side.
    ///
    /// This is the Minkowski-sum trick that turns a moving box against
    /// this box into a moving point against the expanded box.
    pub fn expand(&self, border: Vec2) -> Aabb {
        Aabb::new(self.center, self.half_extents + border)
    }

    /// Returns `true` if `point` lies inside the box, edges included.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let diff = (point - self.center).abs();
        diff.x <= self.half_extents.x && diff.y <= self.half_extents.y
    }

    /// Returns `true` if the two boxes overlap, edges included.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let diff = (other.center - self.center).abs();
        let reach = self.half_extents + other.half_extents;
        diff.x <= reach.x && diff.y <= reach.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;

    #[test]
    fn test_edges() {
        let aabb = Aabb::new(v2(3.0, 5.0), v2(2.0, 3.0));
        assert!(aabb.left() == 1.0);
        assert!(aabb.bottom() == 2.0);
        assert!(aabb.right() == 5.0);
        assert!(aabb.top() == 8.0);
        assert!(aabb.min_corner() == v2(1.0, 2.0));
        assert!(aabb.max_corner() == v2(5.0, 8.0));
    }

    #[test]
    fn test_with_bounds() {
        let aabb = Aabb::with_bounds(v2(1.0, 2.0), v2(5.0, 8.0));
        assert!(aabb == Aabb::new(v2(3.0, 5.0), v2(2.0, 3.0)));
    }

    #[test]
    fn test_expand() {
        let aabb = Aabb::new(v2(1.0, 1.0), v2(1.0, 2.0));
        assert!(aabb.expand(v2(0.5, 1.5)) == Aabb::new(v2(1.0, 1.0), v2(1.5, 3.5)));
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb::new(v2(0.0, 0.0), v2(1.0, 1.0));
        assert!(aabb.contains_point(v2(0.5, -0.5)));
        assert!(aabb.contains_point(v2(1.0, 1.0)));
        assert!(!aabb.contains_point(v2(1.1, 0.0)));
    }

    #[test]
    fn test_overlaps() {
        let aabb = Aabb::new(v2(0.0, 0.0), v2(1.0, 1.0));
        assert!(aabb.overlaps(&Aabb::new(v2(1.5, 0.0), v2(1.0, 1.0))));
        assert!(aabb.overlaps(&Aabb::new(v2(2.0, 0.0), v2(1.0, 1.0))));
        assert!(!aabb.overlaps(&Aabb::new(v2(2.5, 0.0), v2(1.0, 1.0))));
    }
}
