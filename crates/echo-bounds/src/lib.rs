// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Two-dimensional bounds for Echo.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) over `f64` coordinates.
- A NaN handling policy for point accumulation (`NanPolicy`).
- Validation errors for untrusted construction (`BoundsError`).

Design notes:
- Emptiness is encoded in the values themselves: an empty box has
  `min = +inf` and `max = -inf` on both axes. There is no separate flag.
- Every query is total. Dimension queries on an empty box return NaN and
  intersecting disjoint boxes returns the empty box; nothing panics.
- Touching boxes overlap. Intersection is inclusive on edges and corners.
"]

/// Validation errors raised by fallible constructors.
pub mod error;
/// Foundational bounds types.
pub mod types;

pub use error::{Axis, BoundsError};
pub use types::aabb::Aabb;
pub use types::policy::NanPolicy;
