// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by observation zones.

/// Rejected zone configuration.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ZoneError {
    /// `set_legs` was called without a previous or a next task point.
    #[error("a symmetric sector needs at least one adjacent leg")]
    NoAdjacentLegs,
    /// Radii must be finite and non-negative.
    #[error("invalid zone radius {0} (must be finite and >= 0)")]
    InvalidRadius(f64),
    /// Sector angles must lie in 0°..=360°.
    #[error("invalid sector angle {0}° (must be within 0..=360)")]
    InvalidSectorAngle(f64),
}
