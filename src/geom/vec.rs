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

use std::ops::{Add, Mul, Neg, Sub};

/// Convenience function for creating a `Vec2`.
#[inline]
pub fn v2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// A 2D vector of `f32` coordinates.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f32,
    /// The y-coordinate.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Constructs a new vector with the given `x` and `y` coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns the square of the length of the vector.
    pub fn len_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector.
    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Returns the componentwise absolute value.
    pub fn abs(self) -> Vec2 {
        v2(self.x.abs(), self.y.abs())
    }

    /// Returns the componentwise sign of the vector, `1.0` or `-1.0` per
    /// coordinate, treating zero as positive.
    pub fn signum(self) -> Vec2 {
        v2(self.x.signum(), self.y.signum())
    }

    /// Returns the componentwise minimum of two vectors.
    pub fn min(self, other: Vec2) -> Vec2 {
        v2(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns the componentwise maximum of two vectors.
    pub fn max(self, other: Vec2) -> Vec2 {
        v2(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamps each coordinate between the corresponding coordinates of
    /// `min` and `max`.
    pub fn clamp(self, min: Vec2, max: Vec2) -> Vec2 {
        v2(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    /// Returns the vector scaled to length 1, or the zero vector if the
    /// length is 0.
    pub fn normalize_or_zero(self) -> Vec2 {
        let len = self.len();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            v2(self.x / len, self.y / len)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        v2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        v2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        v2(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        v2(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert!(v2(1.0, 2.0) + v2(3.0, -4.0) == v2(4.0, -2.0));
        assert!(v2(1.0, 2.0) - v2(3.0, -4.0) == v2(-2.0, 6.0));
        assert!(v2(1.0, 2.0) * 2.0 == v2(2.0, 4.0));
        assert!(-v2(1.0, -2.0) == v2(-1.0, 2.0));
    }

    #[test]
    fn test_len() {
        assert!(v2(3.0, 4.0).len_sq() == 25.0);
        assert!(v2(3.0, 4.0).len() == 5.0);
    }

    #[test]
    fn test_componentwise() {
        assert!(v2(-1.0, 2.0).abs() == v2(1.0, 2.0));
        assert!(v2(-3.0, 0.0).signum() == v2(-1.0, 1.0));
        assert!(v2(1.0, 5.0).min(v2(2.0, 4.0)) == v2(1.0, 4.0));
        assert!(v2(1.0, 5.0).max(v2(2.0, 4.0)) == v2(2.0, 5.0));
        assert!(v2(-3.0, 7.0).clamp(v2(0.0, 0.0), v2(5.0, 5.0)) == v2(0.0, 5.0));
    }

    #[test]
    fn test_normalize_or_zero() {
        assert!(v2(3.0, 4.0).normalize_or_zero() == v2(0.6, 0.8));
        assert!(Vec2::ZERO.normalize_or_zero() == Vec2::ZERO);
    }
}
