// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial index over airspace records.

use alloc::vec::Vec;

use glidecore_index::{Aabb2D, BoxDistance, Index, Key, RTreeIndex, TreeParams};

use crate::airspace::Airspace;
use crate::error::AirspaceError;
use crate::flat::{FlatBoundingBox, FlatGeoPoint};

/// An airspace found by a proximity query, with its distance to the query point.
pub type Nearby<'a, S> = (&'a Airspace<S>, BoxDistance<i32>);

/// R-tree over [`Airspace`] records keyed by their bounding boxes.
///
/// Queries take `&self` and may run concurrently; mutation needs `&mut self`.
#[derive(Debug)]
pub struct AirspaceSpatialIndex<S: ?Sized> {
    index: RTreeIndex<i32, Airspace<S>>,
}

impl<S: ?Sized> Default for AirspaceSpatialIndex<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> AirspaceSpatialIndex<S> {
    /// Empty index with the default fan-out (16).
    pub fn new() -> Self {
        Self {
            index: Index::with_rtree(),
        }
    }

    /// Empty index with explicit fan-out limits.
    pub fn with_params(params: TreeParams) -> Self {
        Self {
            index: Index::with_rtree_params(params),
        }
    }

    /// Build a packed index from a batch of records.
    pub fn bulk_load(airspaces: impl IntoIterator<Item = Airspace<S>>) -> Self {
        let index = Index::with_rtree_bulk(TreeParams::default(), airspaces);
        log::debug!("bulk-loaded {} airspaces", index.len());
        Self { index }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Add a record.
    pub fn insert(&mut self, airspace: Airspace<S>) -> Key {
        self.index.insert_indexable(airspace)
    }

    /// Remove a record by identity, handing back the stored copy.
    pub fn remove(&mut self, airspace: &Airspace<S>) -> Result<Airspace<S>, AirspaceError> {
        let Some(key) = self.find(airspace) else {
            log::warn!(
                "remove of airspace with bounds {:?} ignored: not in index",
                airspace.bounds()
            );
            return Err(AirspaceError::NotFound(airspace.bounds()));
        };
        Ok(self.index.remove(key)?)
    }

    /// Whether a record with this identity is in the index.
    pub fn contains(&self, airspace: &Airspace<S>) -> bool {
        self.find(airspace).is_some()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// All records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Airspace<S>> + '_ {
        self.index.iter().map(|(_, a)| a)
    }

    /// Records whose bounding box intersects `bbox` (touching counts).
    ///
    /// This is a bounding-box filter; exact containment is up to the caller.
    pub fn query_box(&self, bbox: FlatBoundingBox) -> impl Iterator<Item = &Airspace<S>> + '_ {
        self.index.query_rect(bbox.into()).map(|(_, a)| a)
    }

    /// Records whose bounding box contains `point`.
    pub fn query_point(&self, point: FlatGeoPoint) -> impl Iterator<Item = &Airspace<S>> + '_ {
        self.index.query_point(point.x, point.y).map(|(_, a)| a)
    }

    /// The `k` records closest to `point`, nearest first.
    ///
    /// Records whose box contains the point have zero distance and come first.
    pub fn query_nearest(&self, point: FlatGeoPoint, k: usize) -> Vec<Nearby<'_, S>> {
        let hits: Vec<_> = self
            .index
            .query_nearest(Aabb2D::from(point), k)
            .into_iter()
            .map(|h| (h.payload, h.distance))
            .collect();
        log::trace!("nearest {k} around {point:?}: {} hits", hits.len());
        hits
    }

    /// Every record within `range` of `point`, nearest first.
    ///
    /// Records whose box contains the point are always included.
    pub fn query_range(&self, point: FlatGeoPoint, range: i32) -> Vec<Nearby<'_, S>> {
        let hits: Vec<_> = self
            .index
            .query_within(Aabb2D::from(point), range)
            .into_iter()
            .map(|h| (h.payload, h.distance))
            .collect();
        log::trace!("range {range} around {point:?}: {} hits", hits.len());
        hits
    }

    fn find(&self, airspace: &Airspace<S>) -> Option<Key> {
        self.index
            .query_rect(airspace.bounds().into())
            .find(|(_, stored)| *stored == airspace)
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;
    use alloc::vec;

    use crate::airspace::AirspaceShape;

    fn zone(x: i32, y: i32, w: i32, h: i32) -> Airspace<FlatBoundingBox> {
        Airspace::from_shape(FlatBoundingBox::from_corners(
            FlatGeoPoint::new(x, y),
            FlatGeoPoint::new(x + w, y + h),
        ))
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AirspaceSpatialIndex<FlatBoundingBox>>();
        assert_send_sync::<AirspaceSpatialIndex<dyn AirspaceShape + Send + Sync>>();
    }

    #[test]
    fn query_box_finds_touching_records() {
        let mut idx = AirspaceSpatialIndex::new();
        let ctr = zone(0, 0, 100, 100);
        let tma = zone(100, 0, 50, 50);
        let far = zone(1000, 1000, 10, 10);
        let _ = idx.insert(ctr.clone());
        let _ = idx.insert(tma.clone());
        let _ = idx.insert(far);
        let q = FlatBoundingBox::from_corners(FlatGeoPoint::new(90, 10), FlatGeoPoint::new(100, 20));
        let hits: Vec<_> = idx.query_box(q).collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&&ctr) && hits.contains(&&tma));
    }

    #[test]
    fn nearest_ranks_containing_airspace_first() {
        let mut idx = AirspaceSpatialIndex::new();
        let below = zone(-50, -50, 100, 100);
        let east = zone(30, 60, 10, 10);
        let west = zone(-500, 0, 10, 10);
        for a in [&west, &east, &below] {
            let _ = idx.insert(a.clone());
        }
        let hits = idx.query_nearest(FlatGeoPoint::new(0, 0), 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, &below);
        assert!(hits[0].1.is_overlap());
        assert_eq!(hits[1].0, &east);
        assert_eq!((hits[1].1.dx, hits[1].1.dy), (30, 60));
    }

    #[test]
    fn range_always_includes_overlap() {
        let mut idx = AirspaceSpatialIndex::new();
        let over = zone(-10, -10, 20, 20);
        let near = zone(13, 0, 5, 5);
        let _ = idx.insert(over.clone());
        let _ = idx.insert(near.clone());
        let p = FlatGeoPoint::new(0, 0);
        let hits: Vec<_> = idx.query_range(p, 0).into_iter().map(|h| h.0).collect();
        assert_eq!(hits, vec![&over]);
        let hits: Vec<_> = idx.query_range(p, 13).into_iter().map(|h| h.0).collect();
        assert_eq!(hits, vec![&over, &near]);
    }

    #[test]
    fn remove_by_identity() {
        let mut idx = AirspaceSpatialIndex::new();
        let shape = Arc::new(FlatBoundingBox::around(FlatGeoPoint::new(0, 0), 10));
        let a = Airspace::new(Arc::clone(&shape));
        let twin = Airspace::from_shape(*shape);
        let _ = idx.insert(a.clone());
        assert!(idx.contains(&a));
        assert!(!idx.contains(&twin));
        assert_eq!(
            idx.remove(&twin),
            Err(AirspaceError::NotFound(twin.bounds())),
            "a lookalike is a different airspace"
        );
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.remove(&a), Ok(a.clone()));
        assert!(idx.is_empty());
        assert!(idx.remove(&a).is_err());
    }

    #[test]
    fn bulk_load_then_mutate() {
        let records: Vec<_> = (0..500)
            .map(|i| zone((i % 25) * 40, (i / 25) * 40, 30, 30))
            .collect();
        let mut idx = AirspaceSpatialIndex::bulk_load(records.iter().cloned());
        assert_eq!(idx.len(), 500);
        assert_eq!(idx.iter().count(), 500);
        for r in records.iter().step_by(3) {
            assert!(idx.remove(r).is_ok());
        }
        let p = FlatGeoPoint::new(45, 45);
        let hits: Vec<_> = idx.query_point(p).collect();
        assert_eq!(hits, vec![&records[26]]);
        idx.clear();
        assert!(idx.query_point(p).next().is_none());
    }
}
