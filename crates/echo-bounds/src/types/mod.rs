// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core bounds types (AABB, accumulation policy).
//!
//! Semantics notes:
//! - Overlap and intersection are inclusive on edges; a shared edge yields a
//!   zero-width box rather than the empty box.
//! - Accumulation uses unconditional `min`/`max` reductions per axis, so a box
//!   only ever grows under point addition.

#[doc = "Axis-aligned bounding boxes over `f64` coordinates."]
pub mod aabb;
#[doc = "NaN handling policy for point accumulation."]
pub mod policy;
