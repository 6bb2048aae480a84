// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::metric::BoxDistance;
use crate::types::{Aabb2D, Scalar};

/// A slot reported by a distance query together with its distance to the target.
pub type SlotDistance<T> = (usize, BoxDistance<T>);

/// Spatial backend abstraction used by `IndexGeneric`.
///
/// Backends only see slot numbers and boxes; payloads stay in the index.
pub trait Backend<T: Scalar> {
    /// Insert a new slot into the spatial structure.
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>);

    /// Remove a slot from the spatial structure. Returns `false` if it was not present.
    fn remove(&mut self, slot: usize) -> bool;

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Query slots whose AABB intersects the rectangle.
    fn query_rect<'a>(&'a self, rect: Aabb2D<T>) -> Box<dyn Iterator<Item = usize> + 'a>;

    /// The `k` slots closest to `target` by [`BoxDistance`], nearest first.
    ///
    /// Slots overlapping `target` have zero distance and therefore come first.
    fn query_nearest(&self, target: Aabb2D<T>, k: usize) -> Vec<SlotDistance<T>>;

    /// Every slot whose [`BoxDistance`] to `target` is within `range`, nearest first.
    ///
    /// Overlapping slots are always included.
    fn query_within(&self, target: Aabb2D<T>, range: T) -> Vec<SlotDistance<T>>;
}
