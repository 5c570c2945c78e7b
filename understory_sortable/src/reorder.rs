// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional move of one element within an ordered collection.
//!
//! ## Semantics
//!
//! A move from `from` to `to` removes the element at `from` and reinserts it at
//! `to` in the shortened sequence. The result has the same length, the moved
//! element sits at `to`, elements strictly between the two positions shift by
//! one toward `from`, and everything outside that span keeps its place.
//!
//! Moves where `from == to`, or where either index is out of bounds, are
//! no-ops. Nothing here panics on bad indices.
//!
//! ```
//! use understory_sortable::reorder::compute_reorder;
//!
//! let moved = compute_reorder(&['A', 'B', 'C', 'D'], 0, 2).unwrap();
//! assert_eq!(moved, ['B', 'C', 'A', 'D']);
//! assert!(compute_reorder(&['A', 'B'], 1, 1).is_none());
//! ```

use alloc::vec::Vec;

/// A committed move of the dragged element from one position to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReorderStep {
    /// Position of the element before the move.
    pub from: usize,
    /// Position of the element after the move.
    pub to: usize,
}

impl ReorderStep {
    /// Create a step.
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Whether this step would move anything in a collection of `len` elements.
    pub const fn is_effective(self, len: usize) -> bool {
        self.from != self.to && self.from < len && self.to < len
    }
}

/// Move the element at `from` to `to` in place.
///
/// Returns `false` and leaves `items` untouched when the move is a no-op
/// (equal indices or either index out of bounds).
pub fn reorder_in_place<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if !ReorderStep::new(from, to).is_effective(items.len()) {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Compute the collection that results from moving `from` to `to`.
///
/// Returns `None` when the move is a no-op; callers must not publish a new
/// order in that case.
pub fn compute_reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if !ReorderStep::new(from, to).is_effective(items.len()) {
        return None;
    }
    let mut out = items.to_vec();
    reorder_in_place(&mut out, from, to);
    Some(out)
}
