// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for airspace index operations.

use glidecore_index::IndexError;

use crate::flat::FlatBoundingBox;

/// Errors reported by [`AirspaceSpatialIndex`](crate::AirspaceSpatialIndex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AirspaceError {
    /// No record with this identity is in the index.
    #[error("airspace with bounds {0:?} is not in the index")]
    NotFound(FlatBoundingBox),
    /// The underlying index rejected the operation.
    #[error(transparent)]
    Index(#[from] IndexError),
}
