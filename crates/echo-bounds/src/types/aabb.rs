// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::error::{Axis, BoundsError};
use crate::types::policy::NanPolicy;

/// Axis-aligned bounding box over the closed rectangle
/// `[min_x, max_x] × [min_y, max_y]`.
///
/// Invariants:
/// - A populated box has `min_x <= max_x` and `min_y <= max_y`. Zero width or
///   height (a point or a segment) is legal.
/// - The empty box is `min = +inf, max = -inf` on both axes. Emptiness is
///   derived from those values; query it with [`Aabb::has_data`] rather than
///   inspecting fields.
///
/// The box only grows under [`Aabb::add_point`]. [`Aabb::intersect`] never
/// mutates its inputs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Aabb {
    /// The canonical empty box.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Returns a new empty box, ready to accumulate points.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Builds a box from raw field values without any validation.
    ///
    /// Inconsistent combinations (partial sentinels, inverted axes, NaN) are
    /// representable on purpose; every query stays total on them.
    #[must_use]
    pub const fn from_raw(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Builds a populated box from validated bounds.
    ///
    /// Rejects NaN bounds, any axis whose minimum exceeds its maximum, and a
    /// minimum of `+inf` or maximum of `-inf` (those are the empty sentinels
    /// and would yield a box without data). Degenerate axes (`min == max`)
    /// are accepted.
    pub fn from_bounds(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<Self, BoundsError> {
        check_axis(Axis::X, min_x, max_x)?;
        check_axis(Axis::Y, min_y, max_y)?;
        Ok(Self::from_raw(min_x, max_x, min_y, max_y))
    }

    /// Builds the smallest box containing every point in `points`.
    ///
    /// An empty iterator yields the empty box. NaN points are dropped as in
    /// [`Aabb::add_point`].
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().collect()
    }

    /// Minimum x bound (`+inf` when empty).
    #[must_use]
    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Maximum x bound (`-inf` when empty).
    #[must_use]
    pub const fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Minimum y bound (`+inf` when empty).
    #[must_use]
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum y bound (`-inf` when empty).
    #[must_use]
    pub const fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Widens the box to include `(x, y)`.
    ///
    /// Each bound is updated with an unconditional `min`/`max`, so every point
    /// already inside stays inside. A point with a NaN coordinate is dropped
    /// (see [`NanPolicy::Ignore`]).
    pub fn add_point(&mut self, x: f64, y: f64) {
        if x.is_nan() || y.is_nan() {
            trace!(x, y, "dropping point with NaN coordinate");
            return;
        }
        self.accumulate(x, y);
    }

    /// Widens the box to include `(x, y)`, refusing NaN coordinates.
    ///
    /// On error the box is unchanged.
    pub fn try_add_point(&mut self, x: f64, y: f64) -> Result<(), BoundsError> {
        self.add_point_with(x, y, NanPolicy::Reject)
    }

    /// Widens the box to include `(x, y)` under an explicit NaN `policy`.
    ///
    /// Only [`NanPolicy::Reject`] can fail. Under [`NanPolicy::Propagate`] a
    /// poisoned axis stays NaN for later `Propagate` additions.
    pub fn add_point_with(
        &mut self,
        x: f64,
        y: f64,
        policy: NanPolicy,
    ) -> Result<(), BoundsError> {
        match policy {
            NanPolicy::Ignore => self.add_point(x, y),
            NanPolicy::Reject => {
                if let Some(axis) = nan_axis(x, y) {
                    trace!(
                        %axis,
                        policy = policy.as_str(),
                        "rejecting point with NaN coordinate"
                    );
                    return Err(BoundsError::NanCoordinate { axis });
                }
                self.accumulate(x, y);
            }
            NanPolicy::Propagate => {
                widen_or_poison(Axis::X, &mut self.min_x, &mut self.max_x, x);
                widen_or_poison(Axis::Y, &mut self.min_y, &mut self.max_y, y);
            }
        }
        Ok(())
    }

    /// Returns `true` when every bound differs from its empty sentinel.
    ///
    /// This is a field-by-field check with no cross-field validation: a box
    /// holding any single sentinel value reports no data.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.min_x != f64::INFINITY
            && self.min_y != f64::INFINITY
            && self.max_x != f64::NEG_INFINITY
            && self.max_y != f64::NEG_INFINITY
    }

    /// Negation of [`Aabb::has_data`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_data()
    }

    /// Extent along x, or NaN when the box has no data.
    #[must_use]
    pub fn width(&self) -> f64 {
        if !self.has_data() {
            return f64::NAN;
        }
        self.max_x - self.min_x
    }

    /// Extent along y, or NaN when the box has no data.
    #[must_use]
    pub fn height(&self) -> f64 {
        if !self.has_data() {
            return f64::NAN;
        }
        self.max_y - self.min_y
    }

    /// Width times height, or NaN when the box has no data.
    #[must_use]
    pub fn area(&self) -> f64 {
        if !self.has_data() {
            return f64::NAN;
        }
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// Midpoint of the box.
    ///
    /// `None` when the box has no data or the midpoint is undefined on an
    /// axis: a poisoned (NaN) axis, or one spanning `-inf..+inf`. A box
    /// unbounded on one side only has an infinite center coordinate.
    #[must_use]
    pub fn center(&self) -> Option<(f64, f64)> {
        if !self.has_data() {
            return None;
        }
        // Halve before adding so huge finite bounds do not overflow.
        let cx = 0.5 * self.min_x + 0.5 * self.max_x;
        let cy = 0.5 * self.min_y + 0.5 * self.max_y;
        if cx.is_nan() || cy.is_nan() {
            return None;
        }
        Some((cx, cy))
    }

    /// Returns `true` if `(x, y)` lies in the closed rectangle.
    ///
    /// Always `false` for the empty box and for NaN coordinates.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns `true` if this box overlaps `other` (inclusive on edges).
    ///
    /// Agrees with `self.intersect(other).has_data()` for well-formed boxes.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.has_data() && other.has_data() && !self.disjoint(other)
    }

    /// Returns the overlap of two boxes.
    ///
    /// Disjoint inputs (on either axis) produce the canonical empty box.
    /// Touching inputs produce a zero-width or zero-height box. An axis that
    /// is NaN-poisoned in either input stays poisoned in the result.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.disjoint(other) {
            trace!(lhs = ?self, rhs = ?other, "disjoint boxes intersect to empty");
            return Self::EMPTY;
        }
        let (min_x, max_x) = overlap_axis(self.min_x, self.max_x, other.min_x, other.max_x);
        let (min_y, max_y) = overlap_axis(self.min_y, self.max_y, other.min_y, other.max_y);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    // Strict comparisons: a shared edge is not a gap.
    fn disjoint(&self, other: &Self) -> bool {
        self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y
    }

    fn accumulate(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extend<(f64, f64)> for Aabb {
    fn extend<I: IntoIterator<Item = (f64, f64)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.add_point(x, y);
        }
    }
}

impl FromIterator<(f64, f64)> for Aabb {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut out = Self::EMPTY;
        out.extend(iter);
        out
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), BoundsError> {
    if min.is_nan() || max.is_nan() {
        trace!(%axis, min, max, "rejecting NaN bound");
        return Err(BoundsError::NanCoordinate { axis });
    }
    if min > max {
        trace!(%axis, min, max, "rejecting inverted bounds");
        return Err(BoundsError::Inverted { axis, min, max });
    }
    if min == f64::INFINITY || max == f64::NEG_INFINITY {
        trace!(%axis, min, max, "rejecting sentinel bound");
        return Err(BoundsError::SentinelBound { axis });
    }
    Ok(())
}

// `f64::min`/`max` would swallow a NaN operand; a poisoned axis must survive.
fn overlap_axis(lo_a: f64, hi_a: f64, lo_b: f64, hi_b: f64) -> (f64, f64) {
    if lo_a.is_nan() || hi_a.is_nan() || lo_b.is_nan() || hi_b.is_nan() {
        trace!("intersection keeps poisoned axis");
        return (f64::NAN, f64::NAN);
    }
    (lo_a.max(lo_b), hi_a.min(hi_b))
}

const fn nan_axis(x: f64, y: f64) -> Option<Axis> {
    if x.is_nan() {
        Some(Axis::X)
    } else if y.is_nan() {
        Some(Axis::Y)
    } else {
        None
    }
}

fn widen_or_poison(axis: Axis, lo: &mut f64, hi: &mut f64, v: f64) {
    if v.is_nan() {
        trace!(%axis, "poisoning axis with NaN coordinate");
        *lo = f64::NAN;
        *hi = f64::NAN;
    } else if !(lo.is_nan() || hi.is_nan()) {
        *lo = (*lo).min(v);
        *hi = (*hi).max(v);
    }
}
