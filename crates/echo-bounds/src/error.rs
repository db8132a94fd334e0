// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for bounds validation.

use core::fmt;
use thiserror::Error;

/// Coordinate axis named in validation errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Error type for fallible bounds construction and accumulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    /// A coordinate on `axis` was NaN.
    #[error("NaN coordinate on {axis} axis")]
    NanCoordinate {
        /// Axis carrying the NaN.
        axis: Axis,
    },
    /// The minimum bound on `axis` exceeded the maximum.
    #[error("inverted bounds on {axis} axis: min {min} > max {max}")]
    Inverted {
        /// Axis with inverted bounds.
        axis: Axis,
        /// Offending minimum.
        min: f64,
        /// Offending maximum.
        max: f64,
    },
    /// A minimum of `+inf` or a maximum of `-inf` on `axis`; such a bound is
    /// an empty sentinel and cannot describe a populated box.
    #[error("sentinel bound on {axis} axis cannot describe a populated box")]
    SentinelBound {
        /// Axis carrying the sentinel.
        axis: Axis,
    },
}
