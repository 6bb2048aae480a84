// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;

use crate::backend::{Backend, SlotDistance};
use crate::backends::flatvec::FlatVec;
use crate::backends::rtree::{RTree, TreeParams};
use crate::error::IndexError;
use crate::metric::BoxDistance;
use crate::types::{Aabb2D, Indexable, Scalar};

/// Generational handle for entries.
///
/// A key stops resolving once its entry is removed, even if the slot is reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Index keys are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<T, P> {
    aabb: Aabb2D<T>,
    payload: P,
}

#[derive(Clone, Debug)]
struct Slot<T, P> {
    generation: u32,
    entry: Option<Entry<T, P>>,
}

/// Result of a distance query.
#[derive(Debug)]
pub struct Hit<'a, T, P> {
    /// Handle of the matching entry.
    pub key: Key,
    /// The entry's payload.
    pub payload: &'a P,
    /// Overlap-aware distance from the query box to the entry's box.
    pub distance: BoxDistance<T>,
}

impl<T: Copy, P> Clone for Hit<'_, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, P> Copy for Hit<'_, T, P> {}

/// A generic AABB index parameterized by a spatial backend.
///
/// Inserts and removals take effect immediately; queries always see the
/// current contents.
#[derive(Debug)]
pub struct IndexGeneric<T: Scalar, P, B: Backend<T>> {
    slots: Vec<Slot<T, P>>,
    free_list: Vec<usize>,
    len: usize,
    backend: B,
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Scalar,
    B: Backend<T> + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<T, P, B> Default for IndexGeneric<T, P, B>
where
    T: Scalar,
    B: Backend<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Scalar,
    B: Backend<T>,
{
    /// Create an empty index around an explicit backend instance.
    ///
    /// Anything the backend already holds is discarded.
    pub fn with_backend(mut backend: B) -> Self {
        backend.clear();
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            backend,
        }
    }

    /// Reserve space for at least `n` entries.
    pub fn reserve(&mut self, n: usize) {
        self.slots.reserve(n);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index has no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The spatial backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Insert a new AABB with payload. Returns a stable handle `Key`.
    pub fn insert(&mut self, aabb: Aabb2D<T>, payload: P) -> Key {
        let entry = Some(Entry { aabb, payload });
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.wrapping_add(1);
            slot.entry = entry;
            (idx, slot.generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Slot { generation, entry });
            (self.slots.len() - 1, generation)
        };
        self.backend.insert(idx, aabb);
        self.len += 1;
        Key::new(idx, generation)
    }

    /// Insert a payload under its own bounding box.
    pub fn insert_indexable(&mut self, payload: P) -> Key
    where
        P: Indexable<T>,
    {
        let aabb = payload.aabb();
        self.insert(aabb, payload)
    }

    /// Remove an entry, handing back its payload.
    pub fn remove(&mut self, key: Key) -> Result<P, IndexError> {
        let slot = self
            .slots
            .get_mut(key.idx())
            .filter(|s| s.generation == key.1)
            .ok_or(IndexError::NotFound(key))?;
        let entry = slot.entry.take().ok_or(IndexError::NotFound(key))?;
        if !self.backend.remove(key.idx()) {
            log::warn!("backend had no record of slot {} while removing {key:?}", key.idx());
        }
        self.free_list.push(key.idx());
        self.len -= 1;
        Ok(entry.payload)
    }

    /// Payload of a live entry.
    pub fn get(&self, key: Key) -> Option<&P> {
        self.entry(key).map(|e| &e.payload)
    }

    /// Bounding box of a live entry.
    pub fn aabb(&self, key: Key) -> Option<Aabb2D<T>> {
        self.entry(key).map(|e| e.aabb)
    }

    /// Whether `key` names a live entry.
    pub fn contains_key(&self, key: Key) -> bool {
        self.entry(key).is_some()
    }

    /// All live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &P)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.entry
                .as_ref()
                .map(|e| (Key::new(i, s.generation), &e.payload))
        })
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
        self.backend.clear();
    }

    /// Query for entries whose AABB contains the point.
    pub fn query_point(&self, x: T, y: T) -> impl Iterator<Item = (Key, &P)> + '_ {
        self.query_rect(Aabb2D::from_point(x, y))
    }

    /// Query for entries whose AABB intersects the given rectangle. Touching counts.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> impl Iterator<Item = (Key, &P)> + '_ {
        let slots = self.backend.query_rect(rect);
        let mut out = Vec::new();
        for i in slots {
            if let Some(s) = self.slots.get(i)
                && let Some(e) = s.entry.as_ref()
            {
                out.push((Key::new(i, s.generation), &e.payload));
            }
        }
        out.into_iter()
    }

    /// The `k` entries nearest to `target`, overlapping entries first.
    ///
    /// Ties keep insertion-slot order.
    pub fn query_nearest(&self, target: Aabb2D<T>, k: usize) -> Vec<Hit<'_, T, P>> {
        self.resolve(self.backend.query_nearest(target, k))
    }

    /// Every entry within `range` of `target`, nearest first. Overlapping entries
    /// are always included.
    pub fn query_within(&self, target: Aabb2D<T>, range: T) -> Vec<Hit<'_, T, P>> {
        self.resolve(self.backend.query_within(target, range))
    }

    fn resolve(&self, hits: Vec<SlotDistance<T>>) -> Vec<Hit<'_, T, P>> {
        hits.into_iter()
            .filter_map(|(i, distance)| {
                let s = self.slots.get(i)?;
                let e = s.entry.as_ref()?;
                Some(Hit {
                    key: Key::new(i, s.generation),
                    payload: &e.payload,
                    distance,
                })
            })
            .collect()
    }

    fn entry(&self, key: Key) -> Option<&Entry<T, P>> {
        let s = self.slots.get(key.idx())?;
        if s.generation != key.1 {
            return None;
        }
        s.entry.as_ref()
    }
}

/// Default index using a flat vector backend.
pub type Index<T, P> = IndexGeneric<T, P, FlatVec<T>>;

/// Index backed by an [`RTree`].
pub type RTreeIndex<T, P> = IndexGeneric<T, P, RTree<T>>;

impl<T: Scalar, P> Index<T, P> {
    /// Create an R-tree-backed index with the default fan-out.
    pub fn with_rtree() -> RTreeIndex<T, P> {
        RTreeIndex::new()
    }

    /// Create an R-tree-backed index with explicit fan-out limits.
    pub fn with_rtree_params(params: TreeParams) -> RTreeIndex<T, P> {
        IndexGeneric::with_backend(RTree::new(params))
    }

    /// Build an R-tree-backed index in one pass from indexable payloads.
    ///
    /// Keys are assigned in iteration order.
    pub fn with_rtree_bulk(
        params: TreeParams,
        payloads: impl IntoIterator<Item = P>,
    ) -> RTreeIndex<T, P>
    where
        P: Indexable<T>,
    {
        let slots: Vec<Slot<T, P>> = payloads
            .into_iter()
            .map(|payload| Slot {
                generation: 1,
                entry: Some(Entry {
                    aabb: payload.aabb(),
                    payload,
                }),
            })
            .collect();
        let pairs: Vec<(usize, Aabb2D<T>)> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.entry.as_ref().map(|e| (i, e.aabb)))
            .collect();
        IndexGeneric {
            len: slots.len(),
            backend: RTree::bulk_load(params, &pairs),
            slots,
            free_list: Vec::new(),
        }
    }
}
