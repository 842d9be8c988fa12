// Copyright (c) 2025 The Freebusy Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Batch merging of block collections.
//!
//! Free/busy computations accumulate many blocks from independent sources
//! and need them reduced to a canonical form: the minimal, start-sorted,
//! pairwise-disjoint set covering the same points. `merge` and
//! `merge_in_place` perform that reduction with the standard sort-then-fold
//! algorithm; `is_merged` recognizes sequences already in canonical form.
//!
//! Under the closed-interval semantics of [`Block`], neighbors that touch at
//! a shared boundary point overlap and are therefore coalesced, so canonical
//! sequences never contain touching neighbors.

use crate::block::Block;
use crate::num::BlockNumeric;
use std::cmp::Ordering;

/// Checks whether the given blocks are sorted by start and pairwise
/// disjoint, i.e. already in the canonical form `merge` produces.
///
/// Neighbors sharing a boundary point are NOT disjoint under closed-interval
/// semantics, so a sequence containing them is not considered merged.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::block::Block;
/// # use freebusy_core::merge::is_merged;
///
/// assert!(is_merged(&[Block::new(0, 5), Block::new(10, 20)]));
/// assert!(!is_merged(&[Block::new(0, 5), Block::new(5, 20)])); // touching
/// assert!(!is_merged(&[Block::new(10, 20), Block::new(0, 5)])); // unsorted
/// ```
#[inline]
pub fn is_merged<T>(blocks: &[Block<T>]) -> bool
where
    T: BlockNumeric,
{
    blocks.windows(2).all(|w| w[0].end() < w[1].start())
}

/// Reduces a collection of blocks to the minimal covering set.
///
/// Sorts the input by start, then folds left: each block is collapsed into
/// the previously accumulated one when the two overlap (touching counts),
/// otherwise it opens a new disjoint group. The result is start-sorted and
/// pairwise disjoint, and covers exactly the union of the input points.
///
/// The operation is idempotent: merging an already-merged sequence returns
/// it unchanged.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::block::Block;
/// # use freebusy_core::merge::merge;
///
/// let merged = merge(&[Block::new(1, 5), Block::new(4, 10), Block::new(20, 25)]);
/// assert_eq!(merged, vec![Block::new(1, 10), Block::new(20, 25)]);
/// ```
pub fn merge<T>(blocks: &[Block<T>]) -> Vec<Block<T>>
where
    T: BlockNumeric,
{
    let mut merged = blocks.to_vec();
    merge_in_place(&mut merged);
    merged
}

/// In-place variant of [`merge`], reusing the input allocation.
///
/// Complexity: O(N log N) for the sort plus O(N) for the compaction.
pub fn merge_in_place<T>(blocks: &mut Vec<Block<T>>)
where
    T: BlockNumeric,
{
    if blocks.is_empty() {
        return;
    }

    // Endpoints of valid blocks are always mutually comparable, so the
    // fallback ordering is unreachable.
    blocks.sort_unstable_by(|a, b| {
        a.start()
            .partial_cmp(&b.start())
            .unwrap_or(Ordering::Equal)
    });

    let mut write_index = 0;
    for read_index in 1..blocks.len() {
        let current = blocks[write_index];
        let next = blocks[read_index];

        if current.overlaps(next) {
            blocks[write_index] = current.union(next);
        } else {
            write_index += 1;
            blocks[write_index] = next;
        }
    }
    blocks.truncate(write_index + 1);

    debug_assert!(
        is_merged(blocks),
        "`merge_in_place` output is not disjoint and sorted"
    );
}

impl<T> Block<T>
where
    T: BlockNumeric,
{
    /// Merges `self` together with `others` into the minimal covering set.
    ///
    /// Equivalent to the free [`merge`] over the combined collection; the
    /// receiver carries no special role beyond membership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let merged = Block::new(1, 5).merge_with(&[Block::new(4, 10), Block::new(20, 25)]);
    /// assert_eq!(merged, vec![Block::new(1, 10), Block::new(20, 25)]);
    /// ```
    pub fn merge_with(&self, others: &[Self]) -> Vec<Self> {
        let mut merged = Vec::with_capacity(others.len() + 1);
        merged.push(*self);
        merged.extend_from_slice(others);
        merge_in_place(&mut merged);
        merged
    }
}
