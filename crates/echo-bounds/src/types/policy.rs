// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// How point accumulation treats a NaN coordinate.
///
/// Infinite coordinates are ordinary values under every policy; only NaN is
/// special-cased.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum NanPolicy {
    /// Drop the whole point and leave the box unchanged.
    #[default]
    Ignore,
    /// Poison the affected axis: both of its bounds become NaN. The other
    /// axis still accumulates the point.
    Propagate,
    /// Refuse the point with [`crate::BoundsError::NanCoordinate`].
    Reject,
}

impl NanPolicy {
    /// Short lowercase name used in trace events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Propagate => "propagate",
            Self::Reject => "reject",
        }
    }
}
