// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angles, bearings and polar vectors in a local metric plane.
//!
//! Points are [`kurbo::Point`]s in metres with x pointing east and y pointing
//! north. Bearings are measured in degrees clockwise from north.

use core::ops::{Add, Mul, Neg, Sub};

use kurbo::{Point, Vec2};

/// An angle in degrees.
///
/// Arithmetic does not normalize; use [`Angle::as_bearing`] or
/// [`Angle::as_delta`] where a canonical range is needed.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// 0°.
    pub const ZERO: Self = Self(0.0);
    /// 90°.
    pub const QUARTER_CIRCLE: Self = Self(90.0);
    /// 180°.
    pub const HALF_CIRCLE: Self = Self(180.0);
    /// 360°.
    pub const FULL_CIRCLE: Self = Self(360.0);

    /// Angle from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    /// Value in degrees.
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Value in radians.
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Normalized to `[0°, 360°)`.
    pub fn as_bearing(self) -> Self {
        let d = self.0.rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360.
        if d >= 360.0 { Self(0.0) } else { Self(d) }
    }

    /// Normalized to `(-180°, 180°]`.
    pub fn as_delta(self) -> Self {
        let d = self.as_bearing().0;
        if d > 180.0 { Self(d - 360.0) } else { Self(d) }
    }

    /// The opposite bearing, normalized.
    pub fn reciprocal(self) -> Self {
        (self + Self::HALF_CIRCLE).as_bearing()
    }

    /// Half of this angle.
    pub fn half(self) -> Self {
        Self(self.0 * 0.5)
    }

    /// Whether this bearing lies on the clockwise walk from `start` to `end`,
    /// both ends included.
    pub fn between(self, start: Self, end: Self) -> bool {
        (self - start).as_bearing() <= (end - start).as_bearing()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Distance and bearing from one point to another.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoVector {
    /// Length in metres.
    pub distance: f64,
    /// Direction, clockwise from north.
    pub bearing: Angle,
}

impl GeoVector {
    /// A vector from its polar parts.
    pub const fn new(distance: f64, bearing: Angle) -> Self {
        Self { distance, bearing }
    }

    /// The vector leading from `from` to `to`.
    ///
    /// Coincident points give a zero vector bearing north.
    pub fn between(from: Point, to: Point) -> Self {
        let d = to - from;
        let distance = d.hypot();
        if distance == 0.0 {
            return Self::new(0.0, Angle::ZERO);
        }
        // atan2(east, north) measures clockwise from north.
        let bearing = Angle::from_radians(d.x.atan2(d.y)).as_bearing();
        Self { distance, bearing }
    }

    /// Where this vector leads when applied at `origin`.
    pub fn end_point(&self, origin: Point) -> Point {
        let (sin, cos) = self.bearing.radians().sin_cos();
        origin + Vec2::new(self.distance * sin, self.distance * cos)
    }
}

/// Anything with a position in the local plane, such as an aircraft state.
pub trait Located {
    /// Current position.
    fn location(&self) -> Point;
}

impl Located for Point {
    fn location(&self) -> Point {
        *self
    }
}
