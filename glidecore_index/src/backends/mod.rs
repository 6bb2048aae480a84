// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple, exact reference).
//! - `rtree`: generic R-tree (`T: Scalar`) with R*-style splits (aliases: `RTreeI32`, `RTreeF64`).
//!
//! R* split note
//! -------------
//! An overflowing node holds `M + 1` children. For each axis the children are sorted
//! by their lower and by their upper edge, and every split point `k` with
//! `m <= k <= M + 1 - m` is scored using prefix/suffix bounding boxes `LB_k`, `RB_k`:
//!
//! - the split axis is the one with the smallest sum of `margin(LB_k) + margin(RB_k)`;
//! - along it, the chosen `k` minimizes `area(LB_k ∩ RB_k)`, then `area(LB_k) + area(RB_k)`.
//!
//! Accumulators are widened (`i32`→`i128`, `f64`→`f64`) so the sums cannot overflow.
//! Bulk builds use a sort-tile-recursive pass to seed packed leaves and parents.

pub mod flatvec;
pub mod rtree;

pub use rtree::{RTree, RTreeF64, RTreeI32, TreeParams};
