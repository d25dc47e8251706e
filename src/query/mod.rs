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

//! Discrete and swept collision queries between boxes, points and circles.
//!
//! Every query is a pure function: values in, values out, no state kept
//! between calls. Queries that may fail to find a contact return
//! `Option<Hit>` rather than signalling through an error.

use crate::geom::Vec2;

mod overlap;
mod sweep;


pub use self::overlap::{intersect_aabb, intersect_point, overlap_circle, separation_circle};
pub use self::sweep::{closest_swept_aabb, intersect_segment, swept_aabb};

/// Fraction of the allowed motion that swept queries actually apply.
///
/// Resolved positions stop just short of exact contact, since landing
/// precisely on a boundary risks re-penetration or tunneling on the
/// following simulation step.
pub const TIME_FACTOR: f32 = 0.99;

/// A contact found by one of the intersection queries.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Hit {
    /// The point of contact, on the surface of the box that was tested
    /// against.
    pub pos: Vec2,
    /// The vector that resolves the contact: the penetration for static
    /// queries, or the negated unconsumed displacement for sweeps.
    pub delta: Vec2,
    /// Axis-aligned unit normal at the contact, pointing back toward the
    /// origin of travel (or along the cheapest separation for static
    /// queries).
    pub normal: Vec2,
    /// Fraction in `[0, 1]` of the displacement consumed before contact.
    /// Always 0 for purely static queries.
    pub time: f32,
}

/// The outcome of sweeping a box along a displacement.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Sweep {
    /// The first contact along the motion, if any.
    pub hit: Option<Hit>,
    /// The mover's resolved center position after the allowed motion.
    pub pos: Vec2,
    /// Fraction in `[0, 1]` of the requested displacement that was
    /// allowed before stopping.
    pub time: f32,
}
