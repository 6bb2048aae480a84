// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer points and boxes in a local flat projection.

use glidecore_index::{Aabb2D, BoxDistance, BoxEdge, Indexable};

/// A point in the flat projection, in projection units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlatGeoPoint {
    /// Easting.
    pub x: i32,
    /// Northing.
    pub y: i32,
}

impl FlatGeoPoint {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in the flat projection.
///
/// The lower-left corner never lies right of or above the upper-right corner;
/// every constructor normalizes its inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlatBoundingBox {
    lower_left: FlatGeoPoint,
    upper_right: FlatGeoPoint,
}

impl FlatBoundingBox {
    /// Box spanned by two arbitrary corners.
    pub fn from_corners(a: FlatGeoPoint, b: FlatGeoPoint) -> Self {
        Self {
            lower_left: FlatGeoPoint::new(a.x.min(b.x), a.y.min(b.y)),
            upper_right: FlatGeoPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Degenerate box around a single point.
    pub const fn from_point(p: FlatGeoPoint) -> Self {
        Self {
            lower_left: p,
            upper_right: p,
        }
    }

    /// Square box reaching `radius` from `center` in every direction.
    ///
    /// Negative radii are treated as zero; corners saturate at the `i32` range.
    pub fn around(center: FlatGeoPoint, radius: i32) -> Self {
        let r = radius.max(0);
        Self {
            lower_left: FlatGeoPoint::new(center.x.saturating_sub(r), center.y.saturating_sub(r)),
            upper_right: FlatGeoPoint::new(center.x.saturating_add(r), center.y.saturating_add(r)),
        }
    }

    /// Lower-left corner.
    pub const fn lower_left(&self) -> FlatGeoPoint {
        self.lower_left
    }

    /// Upper-right corner.
    pub const fn upper_right(&self) -> FlatGeoPoint {
        self.upper_right
    }

    /// Minimum x.
    pub const fn left(&self) -> i32 {
        self.lower_left.x
    }

    /// Minimum y.
    pub const fn bottom(&self) -> i32 {
        self.lower_left.y
    }

    /// Maximum x.
    pub const fn right(&self) -> i32 {
        self.upper_right.x
    }

    /// Maximum y.
    pub const fn top(&self) -> i32 {
        self.upper_right.y
    }

    /// Coordinate of one edge.
    pub const fn edge(&self, edge: BoxEdge) -> i32 {
        match edge {
            BoxEdge::Left => self.left(),
            BoxEdge::Bottom => self.bottom(),
            BoxEdge::Right => self.right(),
            BoxEdge::Top => self.top(),
        }
    }

    /// Grow the box to include `p`.
    pub fn expand(&mut self, p: FlatGeoPoint) {
        self.lower_left.x = self.lower_left.x.min(p.x);
        self.lower_left.y = self.lower_left.y.min(p.y);
        self.upper_right.x = self.upper_right.x.max(p.x);
        self.upper_right.y = self.upper_right.y.max(p.y);
    }

    /// Grow the box to include `other`.
    pub fn merge(&mut self, other: &Self) {
        self.expand(other.lower_left);
        self.expand(other.upper_right);
    }

    /// Whether the boxes share at least one point. Touching edges count.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.bottom() <= other.top()
            && other.bottom() <= self.top()
    }

    /// Whether `p` lies inside or on the box.
    pub fn contains(&self, p: FlatGeoPoint) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.bottom() <= p.y && p.y <= self.top()
    }

    /// Centre of the box, rounded towards negative infinity.
    pub fn center(&self) -> FlatGeoPoint {
        let mid = |a: i32, b: i32| (a & b) + ((a ^ b) >> 1);
        FlatGeoPoint::new(
            mid(self.left(), self.right()),
            mid(self.bottom(), self.top()),
        )
    }

    /// Overlap-aware distance to another box; zero on an axis where the boxes overlap.
    pub fn distance(&self, other: &Self) -> BoxDistance<i32> {
        BoxDistance::between(&Aabb2D::from(*self), &Aabb2D::from(*other))
    }
}

impl From<FlatGeoPoint> for FlatBoundingBox {
    fn from(p: FlatGeoPoint) -> Self {
        Self::from_point(p)
    }
}

impl From<FlatBoundingBox> for Aabb2D<i32> {
    fn from(b: FlatBoundingBox) -> Self {
        Self::new(b.left(), b.bottom(), b.right(), b.top())
    }
}

impl From<Aabb2D<i32>> for FlatBoundingBox {
    fn from(a: Aabb2D<i32>) -> Self {
        Self::from_corners(
            FlatGeoPoint::new(a.min_x, a.min_y),
            FlatGeoPoint::new(a.max_x, a.max_y),
        )
    }
}

impl From<FlatGeoPoint> for Aabb2D<i32> {
    fn from(p: FlatGeoPoint) -> Self {
        Self::from_point(p.x, p.y)
    }
}

impl Indexable<i32> for FlatBoundingBox {
    fn aabb(&self) -> Aabb2D<i32> {
        (*self).into()
    }
}

impl Indexable<i32> for FlatGeoPoint {
    fn aabb(&self) -> Aabb2D<i32> {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let b = FlatBoundingBox::from_corners(FlatGeoPoint::new(10, -3), FlatGeoPoint::new(-4, 7));
        assert_eq!((b.left(), b.bottom(), b.right(), b.top()), (-4, -3, 10, 7));
        let back: FlatBoundingBox = Aabb2D::new(5, 5, 1, 1).into();
        assert_eq!(back.lower_left(), FlatGeoPoint::new(1, 1));
    }

    #[test]
    fn edges_follow_accessors() {
        let b = FlatBoundingBox::from_corners(FlatGeoPoint::new(1, 2), FlatGeoPoint::new(3, 4));
        let edges = BoxEdge::ALL.map(|e| b.edge(e));
        assert_eq!(edges, [1, 2, 3, 4]);
        // The flat box and the index box agree edge for edge.
        let a: Aabb2D<i32> = b.into();
        assert_eq!(BoxEdge::ALL.map(|e| e.of(&a)), edges);
    }

    #[test]
    fn expand_and_merge_grow_monotonically() {
        let mut b = FlatBoundingBox::from_point(FlatGeoPoint::new(0, 0));
        b.expand(FlatGeoPoint::new(-2, 5));
        assert_eq!(b, FlatBoundingBox::from_corners(FlatGeoPoint::new(-2, 0), FlatGeoPoint::new(0, 5)));
        b.merge(&FlatBoundingBox::around(FlatGeoPoint::new(10, 10), 1));
        assert_eq!(b.upper_right(), FlatGeoPoint::new(11, 11));
        assert!(b.contains(FlatGeoPoint::new(-2, 0)));
    }

    #[test]
    fn around_saturates_and_clamps() {
        let b = FlatBoundingBox::around(FlatGeoPoint::new(i32::MAX - 1, 0), 10);
        assert_eq!(b.right(), i32::MAX);
        let b = FlatBoundingBox::around(FlatGeoPoint::new(3, 3), -5);
        assert_eq!(b, FlatBoundingBox::from_point(FlatGeoPoint::new(3, 3)));
    }

    #[test]
    fn center_handles_extremes() {
        let b = FlatBoundingBox::from_corners(
            FlatGeoPoint::new(i32::MIN, i32::MIN),
            FlatGeoPoint::new(i32::MAX, i32::MAX),
        );
        assert_eq!(b.center(), FlatGeoPoint::new(-1, -1));
        let b = FlatBoundingBox::from_corners(FlatGeoPoint::new(0, 0), FlatGeoPoint::new(10, 4));
        assert_eq!(b.center(), FlatGeoPoint::new(5, 2));
    }

    #[test]
    fn distance_is_zero_on_overlap() {
        let a = FlatBoundingBox::from_corners(FlatGeoPoint::new(0, 0), FlatGeoPoint::new(10, 10));
        let touching = FlatBoundingBox::from_corners(FlatGeoPoint::new(10, 2), FlatGeoPoint::new(20, 4));
        assert!(a.overlaps(&touching));
        assert!(a.distance(&touching).is_overlap());
        let apart = FlatBoundingBox::from_corners(FlatGeoPoint::new(13, 14), FlatGeoPoint::new(20, 20));
        assert!(!a.overlaps(&apart));
        assert_eq!(a.distance(&apart).squared(), 25);
    }
}
