// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap-aware distance between boxes.
//!
//! [`BoxDistance`] folds "does this box overlap the query" and "how far away is
//! it otherwise" into a single ordering, which lets one tree answer both
//! overlap queries and nearest-neighbour queries.
//!
//! Each of the four [`BoxEdge`]s contributes a separation that is zero unless
//! the candidate lies entirely beyond that edge of the query box:
//!
//! | edge     | separation                 |
//! |----------|----------------------------|
//! | `Left`   | `max(0, a.min_x - b.max_x)` |
//! | `Right`  | `max(0, b.min_x - a.max_x)` |
//! | `Bottom` | `max(0, a.min_y - b.max_y)` |
//! | `Top`    | `max(0, b.min_y - a.max_y)` |
//!
//! For a well-formed box at most one edge per axis can be non-zero, so the
//! per-axis gap is the sum of its two edges. The scalar ordering is the squared
//! euclidean gap, which is zero exactly when the boxes overlap on both axes.

use core::cmp::Ordering;

use crate::types::{Aabb2D, Scalar, ScalarAcc, cmp_partial};

/// The four edges of an axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxEdge {
    /// Minimum x.
    Left,
    /// Minimum y.
    Bottom,
    /// Maximum x.
    Right,
    /// Maximum y.
    Top,
}

impl BoxEdge {
    /// All edges in coordinate order (left, bottom, right, top).
    pub const ALL: [Self; 4] = [Self::Left, Self::Bottom, Self::Right, Self::Top];

    /// The axis this edge bounds.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Bottom | Self::Top => Axis::Y,
        }
    }

    /// Coordinate of this edge on `aabb`.
    pub fn of<T: Copy>(self, aabb: &Aabb2D<T>) -> T {
        match self {
            Self::Left => aabb.min_x,
            Self::Bottom => aabb.min_y,
            Self::Right => aabb.max_x,
            Self::Top => aabb.max_y,
        }
    }
}

/// Coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Separation of a candidate box `b` beyond one edge of the query box `a`.
///
/// Zero when `b` reaches back over (or touches) that edge.
pub fn edge_separation<T: Scalar>(edge: BoxEdge, a: &Aabb2D<T>, b: &Aabb2D<T>) -> T {
    let gap = match edge {
        BoxEdge::Left => T::sub(a.min_x, b.max_x),
        BoxEdge::Right => T::sub(b.min_x, a.max_x),
        BoxEdge::Bottom => T::sub(a.min_y, b.max_y),
        BoxEdge::Top => T::sub(b.min_y, a.max_y),
    };
    T::max_zero(gap)
}

/// Per-axis gap between two boxes; see the [module docs](self).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxDistance<T> {
    /// Horizontal gap, zero when the boxes overlap in x.
    pub dx: T,
    /// Vertical gap, zero when the boxes overlap in y.
    pub dy: T,
}

impl<T: Scalar> BoxDistance<T> {
    /// Distance from query box `a` to candidate box `b`.
    ///
    /// The measure is symmetric in practice, but the edge naming is relative to `a`.
    pub fn between(a: &Aabb2D<T>, b: &Aabb2D<T>) -> Self {
        let mut dx = T::zero();
        let mut dy = T::zero();
        for edge in BoxEdge::ALL {
            let s = edge_separation(edge, a, b);
            match edge.axis() {
                Axis::X => dx = T::add(dx, s),
                Axis::Y => dy = T::add(dy, s),
            }
        }
        Self { dx, dy }
    }

    /// Gap along one axis.
    pub fn along(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }

    /// Whether the boxes overlap on both axes.
    pub fn is_overlap(&self) -> bool {
        let zero = T::zero();
        self.dx <= zero && self.dy <= zero
    }

    /// Squared euclidean gap in the widened accumulator type.
    ///
    /// This is the scalar ordering used by nearest and range queries.
    pub fn squared(&self) -> ScalarAcc<T> {
        let dx = T::widen(self.dx);
        let dy = T::widen(self.dy);
        dx * dx + dy * dy
    }

    /// Compare two distances by [`BoxDistance::squared`].
    pub fn cmp_by_length(&self, other: &Self) -> Ordering {
        cmp_partial(&self.squared(), &other.squared())
    }

    /// Whether this distance is within `range` (in coordinate units).
    ///
    /// Overlap is always within range, whatever the sign of `range`.
    pub fn within(&self, range: T) -> bool {
        if self.is_overlap() {
            return true;
        }
        let r = T::widen(T::max_zero(range));
        self.squared() <= r * r
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Overlap-aware distance from this box to `other`.
    pub fn distance_to(&self, other: &Self) -> BoxDistance<T> {
        BoxDistance::between(self, other)
    }
}
