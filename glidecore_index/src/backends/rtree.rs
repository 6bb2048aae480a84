// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R-tree backend generic over scalar `T: Scalar` with R*-style splits.

use alloc::boxed::Box;
use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::{Ordering, Reverse};
use core::fmt::Debug;
use core::ops::Range;

use crate::backend::{Backend, SlotDistance};
use crate::error::IndexError;
use crate::metric::{BoxDistance, BoxEdge};
use crate::types::{Aabb2D, Scalar, ScalarAcc, area, cmp_partial, margin, union_aabb};

/// Fan-out limits for [`RTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeParams {
    max_children: usize,
    min_children: usize,
}

impl TreeParams {
    /// Default maximum number of children per node.
    pub const DEFAULT_MAX_CHILDREN: usize = 16;
    /// Default minimum number of children per non-root node.
    pub const DEFAULT_MIN_CHILDREN: usize = 6;

    /// Validate and build a parameter set.
    ///
    /// A split must be able to hand at least `min_children` to each half of an
    /// overflowing node, so `2 * min_children <= max_children + 1` and `min_children >= 2`.
    pub fn new(max_children: usize, min_children: usize) -> Result<Self, IndexError> {
        if min_children < 2 || 2 * min_children > max_children + 1 {
            return Err(IndexError::InvalidParams {
                max_children,
                min_children,
            });
        }
        Ok(Self {
            max_children,
            min_children,
        })
    }

    /// Maximum number of children per node.
    pub const fn max_children(self) -> usize {
        self.max_children
    }

    /// Minimum number of children per non-root node.
    pub const fn min_children(self) -> usize {
        self.min_children
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_children: Self::DEFAULT_MAX_CHILDREN,
            min_children: Self::DEFAULT_MIN_CHILDREN,
        }
    }
}

/// R-tree backend: minimal-enlargement descent, R*-style overflow splits and
/// condense-and-reinsert on removal.
///
/// Every node's box is the minimal box around its children and all leaves sit
/// at the same depth.
pub struct RTree<T: Scalar> {
    params: TreeParams,
    root: Option<NodeIdx>,
    arena: Vec<RNode<T>>,
    free_nodes: Vec<NodeIdx>,
    slots: Vec<Option<Aabb2D<T>>>,
    len: usize,
}

#[derive(Clone, Debug)]
struct RNode<T> {
    bbox: Aabb2D<T>,
    kind: NodeKind<T>,
}

#[derive(Clone, Debug)]
enum NodeKind<T> {
    Leaf(Vec<LeafEntry<T>>),
    Branch(Vec<NodeIdx>),
}

impl<T> NodeKind<T> {
    fn len(&self) -> usize {
        match self {
            Self::Leaf(entries) => entries.len(),
            Self::Branch(children) => children.len(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct LeafEntry<T> {
    slot: usize,
    bbox: Aabb2D<T>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

impl<T: Scalar> Default for RTree<T> {
    fn default() -> Self {
        Self::new(TreeParams::default())
    }
}

impl<T: Scalar> RTree<T> {
    /// Create an empty tree with the given fan-out.
    pub fn new(params: TreeParams) -> Self {
        Self {
            params,
            root: None,
            arena: Vec::new(),
            free_nodes: Vec::new(),
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Fan-out parameters of this tree.
    pub fn params(&self) -> TreeParams {
        self.params
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut cur = self.root;
        while let Some(idx) = cur {
            height += 1;
            cur = match &self.arena[idx.get()].kind {
                NodeKind::Leaf(_) => None,
                NodeKind::Branch(children) => children.first().copied(),
            };
        }
        height
    }

    /// Box around everything in the tree.
    pub fn bounds(&self) -> Option<Aabb2D<T>> {
        self.root.map(|r| self.arena[r.get()].bbox)
    }

    /// Build a tree from `(slot, bbox)` pairs with a packed sort-tile-recursive layout.
    pub fn bulk_load(params: TreeParams, pairs: &[(usize, Aabb2D<T>)]) -> Self {
        let mut tree = Self::new(params);
        for &(slot, bbox) in pairs {
            tree.ensure_slot(slot, bbox);
        }
        tree.len = tree.slots.iter().filter(|s| s.is_some()).count();
        if tree.len != pairs.len() {
            log::warn!(
                "bulk load received {} pairs for {} distinct slots; duplicates keep the last box",
                pairs.len(),
                tree.len
            );
        }
        let mut entries: Vec<LeafEntry<T>> = tree
            .slots
            .iter()
            .enumerate()
            .filter_map(|(slot, bbox)| bbox.map(|bbox| LeafEntry { slot, bbox }))
            .collect();
        tree.root = tree.pack(&mut entries);
        log::debug!(
            "bulk-loaded {} entries into {} nodes (height {})",
            tree.len,
            tree.arena.len(),
            tree.height()
        );
        tree
    }

    fn ensure_slot(&mut self, slot: usize, bbox: Aabb2D<T>) {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(bbox);
    }

    fn alloc(&mut self, node: RNode<T>) -> NodeIdx {
        if let Some(idx) = self.free_nodes.pop() {
            self.arena[idx.get()] = node;
            idx
        } else {
            self.arena.push(node);
            NodeIdx::new(self.arena.len() - 1)
        }
    }

    fn release(&mut self, idx: NodeIdx) {
        self.arena[idx.get()].kind = NodeKind::Leaf(Vec::new());
        self.free_nodes.push(idx);
    }

    fn kind_bbox(&self, kind: &NodeKind<T>) -> Aabb2D<T> {
        match kind {
            NodeKind::Leaf(entries) => enclose(entries.iter().map(|e| e.bbox)),
            NodeKind::Branch(children) => enclose(children.iter().map(|c| self.arena[c.get()].bbox)),
        }
    }

    fn refresh_bbox(&mut self, idx: NodeIdx) {
        let bbox = self.kind_bbox(&self.arena[idx.get()].kind);
        self.arena[idx.get()].bbox = bbox;
    }

    fn centroid_x_of_aabb(a: &Aabb2D<T>) -> T {
        Scalar::mid(a.min_x, a.max_x)
    }

    fn centroid_y_of_aabb(a: &Aabb2D<T>) -> T {
        Scalar::mid(a.min_y, a.max_y)
    }

    /// Sort-tile-recursive packing: tile by x centroid, then by y centroid, and
    /// promote full levels until a single root remains.
    ///
    /// Runs are cut into near-equal parts, so every packed node holds at least
    /// `min_children` whenever its level has more than one node.
    fn pack(&mut self, entries: &mut [LeafEntry<T>]) -> Option<NodeIdx> {
        if entries.is_empty() {
            return None;
        }
        let max = self.params.max_children;

        entries.sort_by(|a, b| {
            cmp_partial(
                &Self::centroid_x_of_aabb(&a.bbox),
                &Self::centroid_x_of_aabb(&b.bbox),
            )
        });
        let mut level: Vec<NodeIdx> = Vec::new();
        for run in balanced_runs(entries.len(), tiles_per_axis(entries.len(), max)) {
            let slice = &mut entries[run];
            slice.sort_by(|a, b| {
                cmp_partial(
                    &Self::centroid_y_of_aabb(&a.bbox),
                    &Self::centroid_y_of_aabb(&b.bbox),
                )
            });
            for group in balanced_runs(slice.len(), slice.len().div_ceil(max)) {
                let kind = NodeKind::Leaf(slice[group].to_vec());
                let bbox = self.kind_bbox(&kind);
                level.push(self.alloc(RNode { bbox, kind }));
            }
        }

        while level.len() > max {
            level.sort_by(|a, b| {
                cmp_partial(
                    &Self::centroid_x_of_aabb(&self.arena[a.get()].bbox),
                    &Self::centroid_x_of_aabb(&self.arena[b.get()].bbox),
                )
            });
            let mut next: Vec<NodeIdx> = Vec::new();
            for run in balanced_runs(level.len(), tiles_per_axis(level.len(), max)) {
                let slice = &mut level[run];
                slice.sort_by(|a, b| {
                    cmp_partial(
                        &Self::centroid_y_of_aabb(&self.arena[a.get()].bbox),
                        &Self::centroid_y_of_aabb(&self.arena[b.get()].bbox),
                    )
                });
                for group in balanced_runs(slice.len(), slice.len().div_ceil(max)) {
                    let kind = NodeKind::Branch(slice[group].to_vec());
                    let bbox = self.kind_bbox(&kind);
                    next.push(self.alloc(RNode { bbox, kind }));
                }
            }
            level = next;
        }

        if level.len() == 1 {
            return level.first().copied();
        }
        let kind = NodeKind::Branch(level);
        let bbox = self.kind_bbox(&kind);
        Some(self.alloc(RNode { bbox, kind }))
    }

    /// Pick the child of a branch that should receive `bbox`.
    ///
    /// Above the leaves this is the child needing the least area enlargement.
    /// Directly above the leaves the R* criterion applies first: the least
    /// increase of overlap with the sibling boxes. Remaining ties go to the
    /// smaller child.
    fn choose_subtree(&self, children: &[NodeIdx], bbox: &Aabb2D<T>) -> NodeIdx {
        let zero = T::widen(T::zero());
        let above_leaves = children
            .first()
            .is_some_and(|c| matches!(self.arena[c.get()].kind, NodeKind::Leaf(_)));

        let mut best = children[0];
        let mut best_cost: Option<(ScalarAcc<T>, ScalarAcc<T>, ScalarAcc<T>)> = None;
        for &c in children {
            let cb = self.arena[c.get()].bbox;
            let grown = union_aabb(cb, *bbox);
            let enlargement = area(&grown) - area(&cb);
            let overlap = if above_leaves {
                children
                    .iter()
                    .filter(|&&o| o != c)
                    .map(|o| self.arena[o.get()].bbox)
                    .fold(zero, |acc, ob| {
                        acc + area(&grown.intersect(&ob)) - area(&cb.intersect(&ob))
                    })
            } else {
                zero
            };
            let cost = (overlap, enlargement, area(&cb));
            let better = best_cost.is_none_or(|bc| {
                cmp_partial(&cost.0, &bc.0)
                    .then_with(|| cmp_partial(&cost.1, &bc.1))
                    .then_with(|| cmp_partial(&cost.2, &bc.2))
                    == Ordering::Less
            });
            if better {
                best_cost = Some(cost);
                best = c;
            }
        }
        best
    }

    fn insert_entry(&mut self, entry: LeafEntry<T>) {
        let Some(root) = self.root else {
            let kind = NodeKind::Leaf(vec![entry]);
            self.root = Some(self.alloc(RNode {
                bbox: entry.bbox,
                kind,
            }));
            return;
        };

        let mut path = vec![root];
        let mut cur = root;
        while let NodeKind::Branch(children) = &self.arena[cur.get()].kind {
            cur = self.choose_subtree(children, &entry.bbox);
            path.push(cur);
        }

        // Walk back up: the leaf takes the entry, each branch takes the sibling
        // produced by a split one level below.
        let mut carry: Option<NodeIdx> = None;
        for &idx in path.iter().rev() {
            let node = &mut self.arena[idx.get()];
            match &mut node.kind {
                NodeKind::Leaf(entries) => entries.push(entry),
                NodeKind::Branch(children) => children.extend(carry.take()),
            }
            node.bbox = union_aabb(node.bbox, entry.bbox);
            if node.kind.len() > self.params.max_children {
                carry = Some(self.split(idx));
            }
        }

        if let Some(sibling) = carry {
            let kind = NodeKind::Branch(vec![root, sibling]);
            let bbox = self.kind_bbox(&kind);
            self.root = Some(self.alloc(RNode { bbox, kind }));
            log::debug!("r-tree root split, height now {}", self.height());
        }
    }

    /// Split an overflowing node in place; returns the new sibling.
    fn split(&mut self, idx: NodeIdx) -> NodeIdx {
        let min = self.params.min_children;
        let kind = core::mem::replace(&mut self.arena[idx.get()].kind, NodeKind::Leaf(Vec::new()));
        let (keep, moved) = match kind {
            NodeKind::Leaf(entries) => {
                let (a, b) = rstar_split(entries, min, |e| e.bbox);
                (NodeKind::Leaf(a), NodeKind::Leaf(b))
            }
            NodeKind::Branch(children) => {
                let arena = &self.arena;
                let (a, b) = rstar_split(children, min, |c| arena[c.get()].bbox);
                (NodeKind::Branch(a), NodeKind::Branch(b))
            }
        };
        let keep_bbox = self.kind_bbox(&keep);
        let moved_bbox = self.kind_bbox(&moved);
        self.arena[idx.get()] = RNode {
            bbox: keep_bbox,
            kind: keep,
        };
        self.alloc(RNode {
            bbox: moved_bbox,
            kind: moved,
        })
    }

    fn remove_slot(&mut self, slot: usize) -> bool {
        let Some(old) = self.slots.get(slot).copied().flatten() else {
            return false;
        };
        let Some(root) = self.root else {
            return false;
        };
        let mut orphans = Vec::new();
        if !self.remove_rec(root, slot, &old, &mut orphans) {
            return false;
        }
        self.slots[slot] = None;
        self.len -= 1;
        self.condense_root();
        if !orphans.is_empty() {
            log::trace!("reinserting {} entries from underfull nodes", orphans.len());
        }
        for entry in orphans {
            self.insert_entry(entry);
        }
        true
    }

    fn remove_rec(
        &mut self,
        idx: NodeIdx,
        slot: usize,
        old: &Aabb2D<T>,
        orphans: &mut Vec<LeafEntry<T>>,
    ) -> bool {
        if !self.arena[idx.get()].bbox.overlaps(old) {
            return false;
        }
        let children = match &mut self.arena[idx.get()].kind {
            NodeKind::Leaf(entries) => {
                let Some(pos) = entries.iter().position(|e| e.slot == slot) else {
                    return false;
                };
                entries.swap_remove(pos);
                self.refresh_bbox(idx);
                return true;
            }
            NodeKind::Branch(children) => children.clone(),
        };
        for child in children {
            if self.remove_rec(child, slot, old, orphans) {
                if self.arena[child.get()].kind.len() < self.params.min_children {
                    if let NodeKind::Branch(siblings) = &mut self.arena[idx.get()].kind {
                        siblings.retain(|&c| c != child);
                    }
                    self.dissolve(child, orphans);
                }
                self.refresh_bbox(idx);
                return true;
            }
        }
        false
    }

    /// Free a subtree, collecting its leaf entries for reinsertion.
    fn dissolve(&mut self, idx: NodeIdx, orphans: &mut Vec<LeafEntry<T>>) {
        let kind = core::mem::replace(&mut self.arena[idx.get()].kind, NodeKind::Leaf(Vec::new()));
        self.free_nodes.push(idx);
        match kind {
            NodeKind::Leaf(entries) => orphans.extend(entries),
            NodeKind::Branch(children) => {
                for child in children {
                    self.dissolve(child, orphans);
                }
            }
        }
    }

    /// Drop empty roots and collapse single-child branch roots.
    fn condense_root(&mut self) {
        while let Some(root) = self.root {
            let next = match &self.arena[root.get()].kind {
                NodeKind::Branch(children) if children.len() == 1 => children.first().copied(),
                NodeKind::Branch(children) if children.is_empty() => None,
                NodeKind::Leaf(entries) if entries.is_empty() => None,
                _ => break,
            };
            self.release(root);
            self.root = next;
            log::debug!("r-tree root collapsed, height now {}", self.height());
        }
    }

    fn sort_hits(hits: &mut [SlotDistance<T>]) {
        hits.sort_by(|a, b| a.1.cmp_by_length(&b.1).then(a.0.cmp(&b.0)));
    }
}

/// Number of vertical tiles used when packing `n` items into nodes of `max`.
fn tiles_per_axis(n: usize, max: usize) -> usize {
    let nodes = n.div_ceil(max);
    let mut tiles = 1_usize;
    while tiles * tiles < nodes {
        tiles += 1;
    }
    tiles
}

/// Cut `0..n` into `parts` consecutive ranges whose lengths differ by at most one.
fn balanced_runs(n: usize, parts: usize) -> impl Iterator<Item = Range<usize>> {
    let parts = parts.max(1);
    let base = n / parts;
    let extra = n % parts;
    (0..parts).map(move |i| {
        let start = i * base + i.min(extra);
        start..start + base + usize::from(i < extra)
    })
}

/// Minimal box around `boxes`; the zero box when there are none.
fn enclose<T: Scalar>(mut boxes: impl Iterator<Item = Aabb2D<T>>) -> Aabb2D<T> {
    match boxes.next() {
        Some(first) => boxes.fold(first, union_aabb),
        None => Aabb2D::new(T::zero(), T::zero(), T::zero(), T::zero()),
    }
}

/// R*-tree split of an overflowing child list.
///
/// For each axis, children are sorted by their lower and by their upper edge and
/// every distribution that leaves at least `min` on each side is scored. The axis
/// with the smallest summed margin wins; along it, the distribution with the least
/// overlap between the two halves (then the least total area) is taken.
fn rstar_split<T: Scalar, C: Copy>(
    items: Vec<C>,
    min: usize,
    bbox_of: impl Fn(&C) -> Aabb2D<T>,
) -> (Vec<C>, Vec<C>) {
    let n = items.len();
    let axes = [
        [BoxEdge::Left, BoxEdge::Right],
        [BoxEdge::Bottom, BoxEdge::Top],
    ];

    // (margin sum, order, split point)
    let mut chosen: Option<(ScalarAcc<T>, Vec<C>, usize)> = None;
    for edges in axes {
        let mut margin_sum: Option<ScalarAcc<T>> = None;
        // (overlap, total area, order, split point)
        let mut best: Option<(ScalarAcc<T>, ScalarAcc<T>, Vec<C>, usize)> = None;
        for edge in edges {
            let mut order = items.clone();
            order.sort_by(|a, b| cmp_partial(&edge.of(&bbox_of(a)), &edge.of(&bbox_of(b))));
            let boxes: Vec<Aabb2D<T>> = order.iter().map(&bbox_of).collect();
            let (prefix, suffix) = prefix_suffix_unions(&boxes);
            for k in min..=n.saturating_sub(min) {
                if k == 0 || k >= n {
                    continue;
                }
                let (left, right) = (prefix[k - 1], suffix[k]);
                let m = margin(&left) + margin(&right);
                margin_sum = Some(margin_sum.map_or(m, |s| s + m));
                let overlap = area(&left.intersect(&right));
                let total = area(&left) + area(&right);
                let better = best.as_ref().is_none_or(|(bo, ba, _, _)| {
                    cmp_partial(&overlap, bo).then_with(|| cmp_partial(&total, ba))
                        == Ordering::Less
                });
                if better {
                    best = Some((overlap, total, order.clone(), k));
                }
            }
        }
        if let (Some(m), Some((_, _, order, k))) = (margin_sum, best) {
            let better = chosen
                .as_ref()
                .is_none_or(|(cm, _, _)| cmp_partial(&m, cm) == Ordering::Less);
            if better {
                chosen = Some((m, order, k));
            }
        }
    }

    let (mut left, k) = match chosen {
        Some((_, order, k)) => (order, k),
        None => (items, n / 2),
    };
    let right = left.split_off(k);
    (left, right)
}

fn prefix_suffix_unions<T: Scalar>(boxes: &[Aabb2D<T>]) -> (Vec<Aabb2D<T>>, Vec<Aabb2D<T>>) {
    let mut prefix: Vec<Aabb2D<T>> = Vec::with_capacity(boxes.len());
    for &bb in boxes {
        let next = prefix.last().map_or(bb, |&prev| union_aabb(prev, bb));
        prefix.push(next);
    }
    let mut suffix: Vec<Aabb2D<T>> = Vec::with_capacity(boxes.len());
    for &bb in boxes.iter().rev() {
        let next = suffix.last().map_or(bb, |&prev| union_aabb(bb, prev));
        suffix.push(next);
    }
    suffix.reverse();
    (prefix, suffix)
}

/// Entry of the best-first search frontier.
struct Pending<T: Scalar> {
    key: ScalarAcc<T>,
    item: PendingItem<T>,
}

enum PendingItem<T> {
    Node(NodeIdx),
    Slot(usize, BoxDistance<T>),
}

impl<T: Scalar> Pending<T> {
    // Nodes pop before slots at equal distance so that every slot at that
    // distance is in the heap before any is emitted; slots then pop in slot order.
    fn tie_rank(&self) -> (u8, Reverse<usize>) {
        match self.item {
            PendingItem::Node(_) => (1, Reverse(0)),
            PendingItem::Slot(slot, _) => (0, Reverse(slot)),
        }
    }
}

impl<T: Scalar> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar> Eq for Pending<T> {}

impl<T: Scalar> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar> Ord for Pending<T> {
    // `BinaryHeap` is a max-heap: the nearest entry must compare greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_partial(&other.key, &self.key).then_with(|| self.tie_rank().cmp(&other.tie_rank()))
    }
}

impl<T: Scalar> Backend<T> for RTree<T> {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>) {
        if self.slots.get(slot).copied().flatten().is_some() {
            self.remove_slot(slot);
        }
        self.ensure_slot(slot, aabb);
        self.len += 1;
        self.insert_entry(LeafEntry { slot, bbox: aabb });
    }

    fn remove(&mut self, slot: usize) -> bool {
        self.remove_slot(slot)
    }

    fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.free_nodes.clear();
        self.slots.clear();
        self.len = 0;
    }

    fn query_rect<'a>(&'a self, rect: Aabb2D<T>) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut out = Vec::new();
        if rect.is_empty() {
            log::warn!("rejecting inverted query box {rect:?}");
            return Box::new(out.into_iter());
        }
        let Some(root_idx) = self.root else {
            return Box::new(out.into_iter());
        };
        let mut stack = vec![root_idx];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if !n.bbox.overlaps(&rect) {
                continue;
            }
            match &n.kind {
                NodeKind::Leaf(entries) => {
                    out.extend(
                        entries
                            .iter()
                            .filter(|e| e.bbox.overlaps(&rect))
                            .map(|e| e.slot),
                    );
                }
                NodeKind::Branch(children) => stack.extend(children.iter().copied()),
            }
        }
        Box::new(out.into_iter())
    }

    fn query_nearest(&self, target: Aabb2D<T>, k: usize) -> Vec<SlotDistance<T>> {
        let mut out = Vec::new();
        let Some(root_idx) = self.root else {
            return out;
        };
        if k == 0 {
            return out;
        }
        let mut heap = BinaryHeap::new();
        heap.push(Pending {
            key: BoxDistance::between(&target, &self.arena[root_idx.get()].bbox).squared(),
            item: PendingItem::Node(root_idx),
        });
        while let Some(p) = heap.pop() {
            match p.item {
                PendingItem::Slot(slot, d) => {
                    out.push((slot, d));
                    if out.len() == k {
                        break;
                    }
                }
                PendingItem::Node(idx) => match &self.arena[idx.get()].kind {
                    NodeKind::Leaf(entries) => {
                        for e in entries {
                            let d = BoxDistance::between(&target, &e.bbox);
                            heap.push(Pending {
                                key: d.squared(),
                                item: PendingItem::Slot(e.slot, d),
                            });
                        }
                    }
                    NodeKind::Branch(children) => {
                        for &c in children {
                            let d = BoxDistance::between(&target, &self.arena[c.get()].bbox);
                            heap.push(Pending {
                                key: d.squared(),
                                item: PendingItem::Node(c),
                            });
                        }
                    }
                },
            }
        }
        log::trace!("nearest query returned {} of {} requested", out.len(), k);
        out
    }

    fn query_within(&self, target: Aabb2D<T>, range: T) -> Vec<SlotDistance<T>> {
        let mut out = Vec::new();
        let Some(root_idx) = self.root else {
            return out;
        };
        let mut stack = vec![root_idx];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if !BoxDistance::between(&target, &n.bbox).within(range) {
                continue;
            }
            match &n.kind {
                NodeKind::Leaf(entries) => {
                    for e in entries {
                        let d = BoxDistance::between(&target, &e.bbox);
                        if d.within(range) {
                            out.push((e.slot, d));
                        }
                    }
                }
                NodeKind::Branch(children) => stack.extend(children.iter().copied()),
            }
        }
        Self::sort_hits(&mut out);
        out
    }
}

impl<T: Scalar> Debug for RTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("max_children", &self.params.max_children)
            .field("min_children", &self.params.min_children)
            .field("arena_nodes", &self.arena.len())
            .field("free_nodes", &self.free_nodes.len())
            .field("alive", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// R-tree with i32 coordinates and i128 metrics.
pub type RTreeI32 = RTree<i32>;

/// R-tree with f64 coordinates and f64 metrics.
pub type RTreeF64 = RTree<f64>;
