// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets
//! and as a reference when checking the tree backends.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::{Backend, SlotDistance};
use crate::metric::BoxDistance;
use crate::types::{Aabb2D, Scalar};

/// Flat vector backend with linear scans.
pub struct FlatVec<T: Scalar> {
    entries: Vec<Option<Aabb2D<T>>>,
}

impl<T: Scalar> Default for FlatVec<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Scalar> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("FlatVec")
            .field("total_slots", &total)
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> FlatVec<T> {
    fn distances(&self, target: &Aabb2D<T>) -> Vec<SlotDistance<T>> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|a| (i, BoxDistance::between(target, &a))))
            .collect()
    }
}

impl<T: Scalar> Backend<T> for FlatVec<T> {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(aabb);
    }

    fn remove(&mut self, slot: usize) -> bool {
        self.entries
            .get_mut(slot)
            .and_then(Option::take)
            .is_some()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn query_rect<'a>(&'a self, rect: Aabb2D<T>) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut out = Vec::new();
        for (i, slot) in self.entries.iter().enumerate() {
            if let Some(a) = slot.as_ref()
                && a.overlaps(&rect)
            {
                out.push(i);
            }
        }
        Box::new(out.into_iter())
    }

    fn query_nearest(&self, target: Aabb2D<T>, k: usize) -> Vec<SlotDistance<T>> {
        let mut all = self.distances(&target);
        all.sort_by(|a, b| a.1.cmp_by_length(&b.1));
        all.truncate(k);
        all
    }

    fn query_within(&self, target: Aabb2D<T>, range: T) -> Vec<SlotDistance<T>> {
        let mut hits = self.distances(&target);
        hits.retain(|(_, d)| d.within(range));
        hits.sort_by(|a, b| a.1.cmp_by_length(&b.1));
        hits
    }
}
