// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Airspace records.

use alloc::sync::Arc;
use core::fmt::Debug;

use glidecore_index::{Aabb2D, Indexable};

use crate::flat::FlatBoundingBox;

/// What the index needs from an externally defined airspace shape.
///
/// Exact containment against the true boundary stays with the shape's owner;
/// the index only filters by this box.
pub trait AirspaceShape: Debug {
    /// Conservative bounding box in the flat projection.
    fn bounding_box(&self) -> FlatBoundingBox;
}

impl AirspaceShape for FlatBoundingBox {
    fn bounding_box(&self) -> FlatBoundingBox {
        *self
    }
}

/// An airspace as stored in the spatial index: its bounding box plus a shared
/// handle to the exact shape.
///
/// Two records are equal when they refer to the same shape object and carry the
/// same bounds. Structurally identical shapes behind different handles are
/// different airspaces.
#[derive(Debug)]
pub struct Airspace<S: ?Sized> {
    bounds: FlatBoundingBox,
    shape: Arc<S>,
}

impl<S: AirspaceShape + ?Sized> Airspace<S> {
    /// Wrap a shared shape, taking its bounding box.
    pub fn new(shape: Arc<S>) -> Self {
        Self {
            bounds: shape.bounding_box(),
            shape,
        }
    }
}

impl<S: AirspaceShape> Airspace<S> {
    /// Wrap an owned shape.
    pub fn from_shape(shape: S) -> Self {
        Self::new(Arc::new(shape))
    }
}

impl<S: ?Sized> Airspace<S> {
    /// Wrap a shared shape with explicitly supplied bounds.
    pub fn with_bounds(shape: Arc<S>, bounds: FlatBoundingBox) -> Self {
        Self { bounds, shape }
    }

    /// Bounding box the record is indexed under.
    pub const fn bounds(&self) -> FlatBoundingBox {
        self.bounds
    }

    /// The exact shape.
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// The shared handle to the shape.
    pub fn shape_handle(&self) -> &Arc<S> {
        &self.shape
    }
}

impl<S: ?Sized> Clone for Airspace<S> {
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds,
            shape: Arc::clone(&self.shape),
        }
    }
}

impl<S: ?Sized> PartialEq for Airspace<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shape, &other.shape) && self.bounds == other.bounds
    }
}

impl<S: ?Sized> Eq for Airspace<S> {}

impl<S: ?Sized> Indexable<i32> for Airspace<S> {
    fn aabb(&self) -> Aabb2D<i32> {
        self.bounds.into()
    }
}
