// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glidecore Index: a generic 2D AABB index with an overlap-aware distance metric.
//!
//! - Insert and remove axis-aligned bounding boxes (AABBs) with user payloads.
//! - Query by point or intersecting rectangle.
//! - Rank entries by [`BoxDistance`] with [`IndexGeneric::query_nearest`] and
//!   [`IndexGeneric::query_within`]. Entries overlapping the query box have zero
//!   distance, so one query answers both "what overlaps here" and "what is close".
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Higher layers (like an airspace database) compute bounding boxes in their own
//! projected coordinates and feed them here.
//!
//! Backends are pluggable via the [`Backend`] trait. The default backend is a flat
//! vector (linear scan); [`RTree`] is a dynamic R-tree with fan-out 16 and R*-style
//! splits, generic over the scalar with widened accumulators (i32→i128, f64→f64).
//!
//! # Example
//!
//! ```rust
//! use glidecore_index::{Aabb2D, Index};
//!
//! let mut idx = Index::<i32, &str>::with_rtree();
//! let _home = idx.insert(Aabb2D::new(0, 0, 10, 10), "home");
//! let ridge = idx.insert(Aabb2D::new(13, 14, 20, 20), "ridge");
//!
//! // A point inside the first box.
//! let hits: Vec<_> = idx.query_point(6, 6).map(|(_, name)| *name).collect();
//! assert_eq!(hits, ["home"]);
//!
//! // Overlap first, then by gap: "ridge" is 3 east and 4 north of the query box.
//! let near = idx.query_nearest(Aabb2D::new(0, 0, 10, 10), 2);
//! assert_eq!(*near[0].payload, "home");
//! assert_eq!(near[1].key, ridge);
//! assert_eq!(near[1].distance.squared(), 25);
//!
//! // Removed keys are reported as missing afterwards.
//! assert_eq!(idx.remove(ridge), Ok("ridge"));
//! assert!(idx.remove(ridge).is_err());
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest and smallest, linear scans. Good for very small sets
//!   and as an exact reference.
//! - `RTreeI32`/`RTreeF64`: balanced R-tree; every node's box is the minimal box around
//!   its children and all leaves sit at the same depth. See the [`backends`] docs for
//!   the split heuristic.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Incomparable values
//! compare as equal in every ordering it uses.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod error;
pub mod index;
pub mod metric;
pub mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::rtree::{RTree, RTreeF64, RTreeI32, TreeParams};
pub use error::IndexError;
pub use index::{Hit, Index, IndexGeneric, Key, RTreeIndex};
pub use metric::{Axis, BoxDistance, BoxEdge};
pub use types::{Aabb2D, Indexable, Scalar};
