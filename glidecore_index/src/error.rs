// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for index operations.

use crate::index::Key;

/// Errors reported by the index and its backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The key does not name a live entry (never issued, already removed, or stale).
    #[error("no live entry for key {0:?}")]
    NotFound(Key),
    /// R-tree fan-out limits that cannot be satisfied by a split.
    #[error(
        "invalid tree parameters: max_children = {max_children}, min_children = {min_children} \
         (need min_children >= 2 and 2 * min_children <= max_children + 1)"
    )]
    InvalidParams {
        /// Requested maximum fan-out.
        max_children: usize,
        /// Requested minimum fan-out.
        min_children: usize,
    },
}
