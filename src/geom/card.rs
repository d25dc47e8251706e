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

use crate::geom::{v2, Vec2};

/// Represents the four cardinal directions in 2D space.
///
/// Contact normals produced by the collision queries are always
/// axis-aligned, so they are named by a `Card` before being turned
/// into a unit vector.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Card {
    /// Negative X direction.
    MinusX,

    /// Negative Y direction.
    MinusY,

    /// Positive X direction.
    PlusX,

    /// Positive Y direction.
    PlusY,
}

impl Card {
    /// Returns the negative of the current direction.
    pub fn flip(self) -> Card {
        match self {
            Card::MinusX => Card::PlusX,
            Card::PlusX => Card::MinusX,
            Card::MinusY => Card::PlusY,
            Card::PlusY => Card::MinusY,
        }
    }

    /// Returns all cardinal directions.
    #[inline]
    pub fn values() -> [Card; 4] {
        [Card::MinusX, Card::MinusY, Card::PlusX, Card::PlusY]
    }

    /// Returns the direction along the x-axis with the given `sign`,
    /// treating zero as positive.
    pub fn from_x_sign(sign: f32) -> Card {
        if sign < 0.0 {
            Card::MinusX
        } else {
            Card::PlusX
        }
    }

    /// Returns the direction along the y-axis with the given `sign`,
    /// treating zero as positive.
    pub fn from_y_sign(sign: f32) -> Card {
        if sign < 0.0 {
            Card::MinusY
        } else {
            Card::PlusY
        }
    }
}

impl From<Card> for Vec2 {
    fn from(card: Card) -> Vec2 {
        match card {
            Card::MinusX => v2(-1.0, 0.0),
            Card::MinusY => v2(0.0, -1.0),
            Card::PlusX => v2(1.0, 0.0),
            Card::PlusY => v2(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        for card in Card::values() {
            assert!(card.flip().flip() == card);
            assert!(Vec2::from(card.flip()) == -Vec2::from(card));
        }
    }

    #[test]
    fn test_from_sign() {
        assert!(Card::from_x_sign(-1.0) == Card::MinusX);
        assert!(Card::from_x_sign(1.0) == Card::PlusX);
        assert!(Card::from_x_sign(0.0) == Card::PlusX);
        assert!(Card::from_y_sign(-1.0) == Card::MinusY);
        assert!(Card::from_y_sign(1.0) == Card::PlusY);
    }
}
