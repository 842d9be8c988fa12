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

use crate::error::BlockError;
use crate::num::BlockNumeric;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Returns the smaller of two partially ordered values, preferring `a`.
#[inline]
fn min_val<T: BlockNumeric>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Returns the larger of two partially ordered values, preferring `a`.
#[inline]
fn max_val<T: BlockNumeric>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// A closed interval `[start, end]` on an ordered numeric scale.
///
/// A `Block` is an immutable value: every operation either answers a question
/// about existing blocks or derives new ones, nothing is ever mutated in
/// place. Blocks support relational predicates (containment, overlap),
/// derivations (union, split, trim, pad, intersect), and a small set algebra
/// (`add`, `subtract`) whose results are sequences of zero to two blocks.
/// Batch merging of many blocks lives in the [`merge`](crate::merge) module.
///
/// Both endpoints are included in the interval; two blocks that merely touch
/// at a shared boundary point therefore overlap.
///
/// # Invariants
///
/// `start <= end` after every construction path. Construction from two
/// values normalizes their order, so the invariant cannot be violated by
/// swapped arguments.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Block<T>
where
    T: BlockNumeric,
{
    start: T,
    end: T,
}

impl<T> Block<T>
where
    T: BlockNumeric,
{
    /// Creates a new `Block`, normalizing endpoint order.
    ///
    /// If `to < from` the two values are swapped, so the smaller value always
    /// becomes the start.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints cannot be ordered (e.g. a `NaN` on a float
    /// scale). Use [`Block::try_new`] for a fallible construction boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(8, 3);
    /// assert_eq!(block.start(), 3);
    /// assert_eq!(block.end(), 8);
    /// ```
    #[inline]
    pub fn new(from: T, to: T) -> Self {
        match Self::try_new(from, to) {
            Ok(block) => block,
            Err(_) => panic!("Invalid block: endpoints {from} and {to} cannot be ordered"),
        }
    }

    /// Creates a new `Block` if the endpoints can be ordered.
    ///
    /// Returns [`BlockError::InvalidInterval`] otherwise. This is the only
    /// construction path that can observe unordered input; all derivation
    /// operations start from valid blocks and preserve the invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    /// # use freebusy_core::error::BlockError;
    ///
    /// assert!(Block::try_new(0.0, 10.0).is_ok());
    /// assert_eq!(Block::try_new(f64::NAN, 10.0), Err(BlockError::InvalidInterval));
    /// ```
    #[inline]
    pub fn try_new(from: T, to: T) -> Result<Self, BlockError> {
        match from.partial_cmp(&to) {
            Some(Ordering::Greater) => Ok(Self {
                start: to,
                end: from,
            }),
            Some(_) => Ok(Self {
                start: from,
                end: to,
            }),
            None => Err(BlockError::InvalidInterval),
        }
    }

    /// Creates a new `Block` without normalizing or checking endpoint order
    /// in release builds.
    ///
    /// The caller must ensure `start <= end`. A `debug_assert!` catches
    /// violations during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new_unchecked(0, 10);
    /// assert_eq!(block.length(), 10);
    /// ```
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid block: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound of the block.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound of the block.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the start bound; scheduling parlance for [`Block::start`],
    /// picturing the block on a vertical day planner.
    #[inline]
    pub const fn top(&self) -> T {
        self.start
    }

    /// Returns the end bound; scheduling parlance for [`Block::end`].
    #[inline]
    pub const fn bottom(&self) -> T {
        self.end
    }

    /// Returns the length of the block (`end - start`), non-negative by
    /// invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// assert_eq!(Block::new(10, 25).length(), 15);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if `value` lies within the closed interval, boundary
    /// points included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.contains_point(0));
    /// assert!(block.contains_point(10));
    /// assert!(!block.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies strictly inside `self`, sharing no
    /// boundary point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.surrounds(Block::new(2, 8)));
    /// assert!(!block.surrounds(Block::new(0, 8))); // shared start boundary
    /// ```
    #[inline]
    pub fn surrounds(&self, other: Self) -> bool {
        other.start > self.start && other.end < self.end
    }

    /// Returns `true` if `other` lies inside `self`, boundaries may coincide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.covers(Block::new(0, 10)));
    /// assert!(block.covers(Block::new(0, 8)));
    /// assert!(!block.covers(Block::new(-1, 8)));
    /// ```
    #[inline]
    pub fn covers(&self, other: Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Returns `true` if `self` overlaps the leading (start-side) edge of
    /// `other`: `self` begins at or before `other` and ends within it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let early = Block::new(0, 10);
    /// let late = Block::new(5, 15);
    /// assert!(early.overlaps_start(late));
    /// assert!(!late.overlaps_start(early));
    /// ```
    #[inline]
    pub fn overlaps_start(&self, other: Self) -> bool {
        self.start <= other.start && other.contains_point(self.end)
    }

    /// Returns `true` if `self` overlaps the trailing (end-side) edge of
    /// `other`: `self` ends at or after `other` and begins within it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let early = Block::new(0, 10);
    /// let late = Block::new(5, 15);
    /// assert!(late.overlaps_end(early));
    /// assert!(!early.overlaps_end(late));
    /// ```
    #[inline]
    pub fn overlaps_end(&self, other: Self) -> bool {
        self.end >= other.end && other.contains_point(self.start)
    }

    /// Returns `true` if the two blocks share at least one point.
    ///
    /// Symmetric by construction. Under closed-interval semantics, blocks
    /// that merely touch at a shared boundary point overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.overlaps(Block::new(5, 15)));
    /// assert!(block.overlaps(Block::new(10, 20))); // touching counts
    /// assert!(!block.overlaps(Block::new(11, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.contains_point(other.start) || other.contains_point(self.start)
    }

    /// Returns the minimal block enclosing both `self` and `other`.
    ///
    /// This is a bounding span, computed regardless of whether the blocks
    /// overlap; for disjoint inputs the result also covers the gap between
    /// them. Callers wanting set-union semantics should check
    /// [`Block::overlaps`] first or use [`Block::add`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let a = Block::new(0, 5);
    /// let b = Block::new(10, 20);
    /// assert_eq!(a.union(b), Block::new(0, 20));
    /// assert_eq!(a.union(b), b.union(a));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self {
            start: min_val(self.start, other.start),
            end: max_val(self.end, other.end),
        }
    }

    /// Cuts `other`'s span out of `self` by bounds alone, returning the
    /// fragment before `other` and the fragment after it.
    ///
    /// This is a pure bound computation through the normalizing constructor;
    /// it does not verify that `other` lies within `self`. Callers establish
    /// [`Block::surrounds`] or [`Block::covers`] first ([`Block::subtract`]
    /// does exactly that).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// let (before, after) = block.split(Block::new(4, 6));
    /// assert_eq!(before, Block::new(0, 4));
    /// assert_eq!(after, Block::new(6, 10));
    /// ```
    #[inline]
    pub fn split(&self, other: Self) -> (Self, Self) {
        (
            Self::new(self.start, other.start),
            Self::new(other.end, self.end),
        )
    }

    /// Returns a block with its start moved to `new_top`.
    ///
    /// Bounds are normalized like any construction, so a `new_top` beyond the
    /// current end flips the block around the old end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// assert_eq!(Block::new(0, 10).trim_from(5), Block::new(5, 10));
    /// ```
    #[inline]
    pub fn trim_from(&self, new_top: T) -> Self {
        Self::new(new_top, self.end)
    }

    /// Returns a block with its end moved to `new_bottom`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// assert_eq!(Block::new(0, 10).trim_to(5), Block::new(0, 5));
    /// ```
    #[inline]
    pub fn trim_to(&self, new_bottom: T) -> Self {
        Self::new(self.start, new_bottom)
    }

    /// Intersects `self` with `limiter`.
    ///
    /// Returns [`BlockError::EmptyIntersection`] when the two blocks do not
    /// overlap, since the clipped bounds would violate the `start <= end`
    /// invariant. Blocks touching at a boundary intersect in the degenerate
    /// block containing just that point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert_eq!(block.limited(Block::new(5, 15)), Ok(Block::new(5, 10)));
    /// assert!(block.limited(Block::new(20, 30)).is_err());
    /// ```
    #[inline]
    pub fn limited(&self, limiter: Self) -> Result<Self, BlockError> {
        let start = max_val(self.start, limiter.start);
        let end = min_val(self.end, limiter.end);

        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(BlockError::EmptyIntersection)
        }
    }

    /// Expands the block outward by `top_padding` before its start and
    /// `bottom_padding` after its end.
    ///
    /// Negative padding arguments are clamped to zero; padding never shrinks
    /// a block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let block = Block::new(5, 10);
    /// assert_eq!(block.padded(2, 3), Block::new(3, 13));
    /// assert_eq!(block.padded(-2, -3), block);
    /// ```
    #[inline]
    pub fn padded(&self, top_padding: T, bottom_padding: T) -> Self {
        let top = max_val(top_padding, T::zero());
        let bottom = max_val(bottom_padding, T::zero());

        Self {
            start: self.start - top,
            end: self.end + bottom,
        }
    }

    /// Set-union restricted to the overlapping case.
    ///
    /// Returns the single-element sequence `[self.union(other)]` when the
    /// blocks overlap (touching counts). Otherwise the two blocks stay
    /// disjoint and both are returned, argument first; this pass-through
    /// branch makes no ordering promise.
    ///
    /// Operator `+` delegates here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let merged = Block::new(3, 8).add(Block::new(5, 12));
    /// assert_eq!(merged.len(), 1);
    /// assert_eq!(merged[0], Block::new(3, 12));
    /// ```
    pub fn add(&self, other: Self) -> SmallVec<Self, 2> {
        if self.overlaps(other) {
            smallvec::smallvec![self.union(other)]
        } else {
            smallvec::smallvec![other, *self]
        }
    }

    /// Removes the portion of `self` covered by `other`.
    ///
    /// Returns:
    /// * 0 blocks when `other` covers `self` entirely;
    /// * 1 block when `other` clips one side of `self`, or does not overlap
    ///   it at all (in which case `self` comes back unchanged);
    /// * 2 blocks when `self` surrounds `other`, which punches a hole.
    ///
    /// The boundary points of the removed span remain in the remainders,
    /// consistent with the bounds-based [`Block::split`].
    ///
    /// This is the corrected set difference; the historic cascade with its
    /// swallow-on-no-relation fall-through is preserved separately as
    /// [`Block::subtract_legacy`]. Operator `-` delegates here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let remainder = Block::new(5, 25).subtract(Block::new(10, 20));
    /// assert_eq!(remainder.len(), 2);
    /// assert_eq!(remainder[0], Block::new(5, 10));
    /// assert_eq!(remainder[1], Block::new(20, 25));
    ///
    /// // No overlap removes nothing.
    /// let untouched = Block::new(0, 5).subtract(Block::new(10, 20));
    /// assert_eq!(untouched.len(), 1);
    /// assert_eq!(untouched[0], Block::new(0, 5));
    /// ```
    pub fn subtract(&self, other: Self) -> SmallVec<Self, 2> {
        if !self.overlaps(other) {
            return smallvec::smallvec![*self];
        }

        let mut remainder = SmallVec::new();
        if self.start < other.start {
            remainder.push(Self::new_unchecked(self.start, other.start));
        }
        if other.end < self.end {
            remainder.push(Self::new_unchecked(other.end, self.end));
        }
        remainder
    }

    /// The historic subtraction cascade, preserved verbatim as a named mode.
    ///
    /// Differences from [`Block::subtract`]:
    /// * a subtrahend with no relation to `self` yields an EMPTY result
    ///   rather than `[self]` — the historic fall-through swallows the
    ///   minuend;
    /// * a subtrahend straddling one of `self`'s edges (sticking out of the
    ///   block) falls through the containment branches and is swallowed the
    ///   same way;
    /// * a subtrahend touching exactly at `self`'s start is an explicit
    ///   no-op branch returning `[self]`.
    ///
    /// New callers should prefer [`Block::subtract`]; this form exists so
    /// the historic results remain reproducible side by side with the
    /// corrected ones.
    pub fn subtract_legacy(&self, other: Self) -> SmallVec<Self, 2> {
        if *self == other {
            return SmallVec::new();
        }
        if self.surrounds(other) {
            let (before, after) = self.split(other);
            return smallvec::smallvec![before, after];
        }
        if self.covers(other) && self.overlaps_start(other) {
            return smallvec::smallvec![self.trim_to(other.start)];
        }
        if self.covers(other) && self.overlaps_end(other) {
            return smallvec::smallvec![self.trim_from(other.end)];
        }
        if self.overlaps(other) && other.end == self.start {
            return smallvec::smallvec![*self];
        }

        // Historic fall-through: anything else is swallowed.
        SmallVec::new()
    }

    /// The sequence form of subtraction: rebuilds two blocks from the
    /// boundary points of `others` that fall within `self`.
    ///
    /// Walks `others` in input order, collecting each member's start and end
    /// when [`Block::contains_point`] accepts it, and stops after four
    /// points. The first two points become one block and the next two
    /// another, through the normalizing constructor.
    ///
    /// Returns [`BlockError::InsufficientBoundaryPoints`] when fewer than
    /// four qualifying points exist, rather than fabricating blocks from
    /// missing values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::block::Block;
    ///
    /// let day = Block::new(0, 100);
    /// let carved = day
    ///     .subtract_all(&[Block::new(10, 20), Block::new(30, 40)])
    ///     .unwrap();
    /// assert_eq!(carved, (Block::new(10, 20), Block::new(30, 40)));
    ///
    /// assert!(day.subtract_all(&[Block::new(10, 20)]).is_err());
    /// ```
    pub fn subtract_all(&self, others: &[Self]) -> Result<(Self, Self), BlockError> {
        let mut points: SmallVec<T, 4> = SmallVec::new();

        'collect: for block in others {
            for point in [block.start, block.end] {
                if self.contains_point(point) {
                    points.push(point);
                    if points.len() == 4 {
                        break 'collect;
                    }
                }
            }
        }

        if points.len() < 4 {
            return Err(BlockError::InsufficientBoundaryPoints {
                found: points.len(),
            });
        }

        Ok((
            Self::new(points[0], points[1]),
            Self::new(points[2], points[3]),
        ))
    }
}

impl<T> std::ops::Add for Block<T>
where
    T: BlockNumeric,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Block::add(&self, rhs)
    }
}

impl<T> std::ops::Sub for Block<T>
where
    T: BlockNumeric,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T> Default for Block<T>
where
    T: BlockNumeric,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Display for Block<T>
where
    T: BlockNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Block<T>
where
    T: BlockNumeric,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> From<RangeInclusive<T>> for Block<T>
where
    T: BlockNumeric,
{
    /// Converts through the normalizing constructor, so a backwards range
    /// becomes a forwards block.
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (from, to) = range.into_inner();
        Self::new(from, to)
    }
}

impl<T> From<Block<T>> for RangeInclusive<T>
where
    T: BlockNumeric,
{
    #[inline]
    fn from(block: Block<T>) -> Self {
        block.start..=block.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    fn blk(from: i64, to: i64) -> Block<i64> {
        Block::new(from, to)
    }

    #[test]
    fn test_construction_ordered() {
        let block = blk(10, 20);
        assert_eq!(block.start(), 10);
        assert_eq!(block.end(), 20);
        assert_eq!(block.length(), 10);
    }

    #[test]
    fn test_construction_swaps_reversed_endpoints() {
        let block = blk(20, 10);
        assert_eq!(block.start(), 10);
        assert_eq!(block.end(), 20);
    }

    #[test]
    fn test_top_bottom_aliases() {
        let block = blk(3, 9);
        assert_eq!(block.top(), block.start());
        assert_eq!(block.bottom(), block.end());
    }

    #[test]
    fn test_try_new_rejects_unordered_endpoints() {
        assert_eq!(Block::try_new(0.0, 10.0), Ok(Block::new(0.0, 10.0)));
        assert_eq!(
            Block::try_new(f64::NAN, 10.0),
            Err(BlockError::InvalidInterval)
        );
        assert_eq!(
            Block::try_new(0.0, f64::NAN),
            Err(BlockError::InvalidInterval)
        );
    }

    #[test]
    #[should_panic(expected = "Invalid block")]
    fn test_new_panics_on_unordered_endpoints() {
        Block::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_default_is_degenerate_origin() {
        let block: Block<i64> = Default::default();
        assert_eq!(block, blk(0, 0));
        assert_eq!(block.length(), 0);
    }

    #[test]
    fn test_contains_point_boundaries_included() {
        let block = blk(0, 10);
        assert!(block.contains_point(0));
        assert!(block.contains_point(5));
        assert!(block.contains_point(10));
        assert!(!block.contains_point(-1));
        assert!(!block.contains_point(11));
    }

    #[test]
    fn test_surrounds_is_strict() {
        let block = blk(0, 10);
        assert!(block.surrounds(blk(2, 8)));
        assert!(!block.surrounds(blk(0, 8)));
        assert!(!block.surrounds(blk(2, 10)));
        assert!(!block.surrounds(blk(0, 10)));
        assert!(!block.surrounds(blk(-1, 11)));
    }

    #[test]
    fn test_covers_is_non_strict() {
        let block = blk(0, 10);
        assert!(block.covers(blk(2, 8)));
        assert!(block.covers(blk(0, 8)));
        assert!(block.covers(blk(2, 10)));
        assert!(block.covers(blk(0, 10)));
        assert!(!block.covers(blk(-1, 8)));
        assert!(!block.covers(blk(2, 11)));
    }

    #[test]
    fn test_overlaps_start_and_end() {
        let early = blk(0, 10);
        let late = blk(5, 15);

        assert!(early.overlaps_start(late));
        assert!(!early.overlaps_end(late));
        assert!(late.overlaps_end(early));
        assert!(!late.overlaps_start(early));
    }

    #[test]
    fn test_overlaps_cases() {
        let block = blk(0, 10);

        assert!(block.overlaps(blk(5, 15)));
        assert!(block.overlaps(blk(-5, 5)));
        assert!(block.overlaps(blk(2, 8)));
        assert!(block.overlaps(blk(-5, 15)));
        assert!(block.overlaps(block));
        // Touching at a boundary point counts under closed semantics.
        assert!(block.overlaps(blk(10, 20)));
        assert!(block.overlaps(blk(-5, 0)));
        // Gaps do not.
        assert!(!block.overlaps(blk(11, 20)));
        assert!(!block.overlaps(blk(-20, -1)));
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let cases = [
            (blk(0, 10), blk(5, 15)),
            (blk(0, 10), blk(10, 20)),
            (blk(0, 10), blk(11, 20)),
            (blk(0, 10), blk(2, 8)),
            (blk(3, 3), blk(3, 3)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(b), b.overlaps(a), "asymmetric for {a} / {b}");
        }
    }

    #[test]
    fn test_union_is_bounding_span() {
        let a = blk(0, 5);
        let b = blk(10, 20);

        // Commutative, and covers both inputs even across a gap.
        assert_eq!(a.union(b), blk(0, 20));
        assert_eq!(a.union(b), b.union(a));
        assert!(a.union(b).covers(a));
        assert!(a.union(b).covers(b));

        let c = blk(3, 8);
        assert_eq!(blk(0, 10).union(c), blk(0, 10));
    }

    #[test]
    fn test_split_bounds_only() {
        let block = blk(0, 10);
        let (before, after) = block.split(blk(4, 6));
        assert_eq!(before, blk(0, 4));
        assert_eq!(after, blk(6, 10));
    }

    #[test]
    fn test_split_then_add_reconstructs_surrounded_case() {
        let block = blk(5, 25);
        let hole = blk(10, 20);
        assert!(block.surrounds(hole));

        let (before, after) = block.split(hole);
        let rejoined = before.add(hole);
        assert_eq!(rejoined.len(), 1);
        let rejoined = rejoined[0].add(after);
        assert_eq!(rejoined.len(), 1);
        assert_eq!(rejoined[0], block);
    }

    #[test]
    fn test_trim_from_and_trim_to() {
        assert_eq!(blk(0, 10).trim_from(5), blk(5, 10));
        assert_eq!(blk(0, 10).trim_to(5), blk(0, 5));
        // Bounds normalize like any construction.
        assert_eq!(blk(0, 10).trim_from(15), blk(10, 15));
    }

    #[test]
    fn test_limited_clips_to_limiter() {
        let block = blk(0, 10);
        assert_eq!(block.limited(blk(5, 15)), Ok(blk(5, 10)));
        assert_eq!(block.limited(blk(-5, 5)), Ok(blk(0, 5)));
        assert_eq!(block.limited(blk(2, 8)), Ok(blk(2, 8)));
        assert_eq!(block.limited(blk(-5, 15)), Ok(blk(0, 10)));
    }

    #[test]
    fn test_limited_touching_yields_degenerate_block() {
        assert_eq!(blk(0, 10).limited(blk(10, 20)), Ok(blk(10, 10)));
    }

    #[test]
    fn test_limited_disjoint_is_empty_intersection() {
        assert_eq!(
            blk(0, 10).limited(blk(20, 30)),
            Err(BlockError::EmptyIntersection)
        );
        assert_eq!(
            blk(20, 30).limited(blk(0, 10)),
            Err(BlockError::EmptyIntersection)
        );
    }

    #[test]
    fn test_padded_expands_outward() {
        let block = blk(5, 10);
        assert_eq!(block.padded(2, 3), blk(3, 13));
        assert_eq!(block.padded(0, 0), block);
    }

    #[test]
    fn test_padded_clamps_negative_padding() {
        let block = blk(5, 10);
        assert_eq!(block.padded(-2, -3), block);
        assert_eq!(block.padded(-2, 3), blk(5, 13));
        // Never shrinks.
        assert!(block.padded(-100, -100).length() >= block.length());
    }

    #[test]
    fn test_add_overlapping_collapses_to_union() {
        let merged = blk(3, 8).add(blk(5, 12));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0], blk(3, 12));

        // Touching blocks collapse too.
        let merged = blk(0, 5).add(blk(5, 9));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0], blk(0, 9));
    }

    #[test]
    fn test_add_disjoint_passes_both_through() {
        let kept = blk(0, 5).add(blk(10, 15));
        assert_eq!(kept.len(), 2);
        // Argument first.
        assert_eq!(kept[0], blk(10, 15));
        assert_eq!(kept[1], blk(0, 5));
    }

    #[test]
    fn test_subtract_surrounded_splits() {
        let remainder = blk(5, 25).subtract(blk(10, 20));
        assert_eq!(remainder.len(), 2);
        assert_eq!(remainder[0], blk(5, 10));
        assert_eq!(remainder[1], blk(20, 25));
    }

    #[test]
    fn test_subtract_equal_cancels() {
        assert!(blk(1, 5).subtract(blk(1, 5)).is_empty());
    }

    #[test]
    fn test_subtract_clips_edges() {
        // Subtrahend flush with the end.
        let remainder = blk(0, 10).subtract(blk(5, 10));
        assert_eq!(remainder.len(), 1);
        assert_eq!(remainder[0], blk(0, 5));

        // Subtrahend flush with the start.
        let remainder = blk(0, 10).subtract(blk(0, 5));
        assert_eq!(remainder.len(), 1);
        assert_eq!(remainder[0], blk(5, 10));

        // Subtrahend straddling the end.
        let remainder = blk(5, 15).subtract(blk(10, 20));
        assert_eq!(remainder.len(), 1);
        assert_eq!(remainder[0], blk(5, 10));
    }

    #[test]
    fn test_subtract_disjoint_returns_self() {
        let remainder = blk(0, 5).subtract(blk(10, 20));
        assert_eq!(remainder.len(), 1);
        assert_eq!(remainder[0], blk(0, 5));
    }

    #[test]
    fn test_subtract_touch_at_start_is_noop() {
        let remainder = blk(5, 10).subtract(blk(3, 5));
        assert_eq!(remainder.len(), 1);
        assert_eq!(remainder[0], blk(5, 10));
    }

    #[test]
    fn test_subtract_covered_is_empty() {
        assert!(blk(5, 10).subtract(blk(0, 20)).is_empty());
    }

    #[test]
    fn test_subtract_legacy_matches_corrected_on_contained_cases() {
        let cases = [
            (blk(5, 25), blk(10, 20)), // surrounded
            (blk(0, 10), blk(5, 10)),  // flush end
            (blk(0, 10), blk(0, 5)),   // flush start
            (blk(1, 5), blk(1, 5)),    // equal
            (blk(5, 10), blk(3, 5)),   // touch at start
        ];
        for (minuend, subtrahend) in cases {
            assert_eq!(
                minuend.subtract_legacy(subtrahend),
                minuend.subtract(subtrahend),
                "diverged for {minuend} - {subtrahend}"
            );
        }
    }

    #[test]
    fn test_subtract_legacy_swallows_unrelated_subtrahend() {
        // The historic fall-through: no relation removes everything.
        assert!(blk(0, 5).subtract_legacy(blk(10, 20)).is_empty());
    }

    #[test]
    fn test_subtract_legacy_swallows_straddling_subtrahend() {
        // A subtrahend sticking out of the block falls through the
        // containment branches and is swallowed as well.
        assert!(blk(5, 15).subtract_legacy(blk(10, 20)).is_empty());
        assert!(blk(5, 15).subtract_legacy(blk(0, 10)).is_empty());
    }

    #[test]
    fn test_subtract_all_pairs_boundary_points() {
        let day = blk(0, 100);
        let carved = day
            .subtract_all(&[blk(10, 20), blk(30, 40)])
            .expect("four points inside");
        assert_eq!(carved, (blk(10, 20), blk(30, 40)));
    }

    #[test]
    fn test_subtract_all_uses_first_four_points() {
        let day = blk(0, 100);
        let carved = day
            .subtract_all(&[blk(10, 20), blk(30, 40), blk(50, 60)])
            .expect("more than four points inside");
        assert_eq!(carved, (blk(10, 20), blk(30, 40)));
    }

    #[test]
    fn test_subtract_all_skips_points_outside_self() {
        let day = blk(0, 100);
        // -5 falls outside and is skipped; the remaining points pair up
        // across member boundaries.
        let carved = day
            .subtract_all(&[blk(-5, 50), blk(60, 70), blk(80, 90)])
            .expect("four qualifying points");
        assert_eq!(carved, (blk(50, 60), blk(70, 80)));
    }

    #[test]
    fn test_subtract_all_insufficient_points() {
        let day = blk(0, 100);
        assert_eq!(
            day.subtract_all(&[blk(10, 20)]),
            Err(BlockError::InsufficientBoundaryPoints { found: 2 })
        );
        assert_eq!(
            day.subtract_all(&[blk(-5, 50), blk(60, 70)]),
            Err(BlockError::InsufficientBoundaryPoints { found: 3 })
        );
        assert_eq!(
            day.subtract_all(&[]),
            Err(BlockError::InsufficientBoundaryPoints { found: 0 })
        );
    }

    #[test]
    fn test_operator_add() {
        let merged = blk(3, 8) + blk(5, 12);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0], blk(3, 12));
    }

    #[test]
    fn test_operator_sub() {
        let remainder = blk(5, 25) - blk(10, 20);
        assert_eq!(remainder.len(), 2);
        assert_eq!(remainder[0], blk(5, 10));
        assert_eq!(remainder[1], blk(20, 25));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(blk(1, 5) < blk(2, 3));
        assert!(blk(1, 4) < blk(1, 5));
        assert!(blk(2, 3) > blk(1, 100));
        assert_eq!(blk(1, 5), blk(1, 5));
    }

    #[test]
    fn test_display_and_debug() {
        let block = blk(3, 8);
        assert_eq!(format!("{}", block), "[3, 8]");
        assert_eq!(format!("{:?}", block), "Block { start: 3, end: 8 }");
    }

    #[test]
    fn test_range_inclusive_conversions() {
        let block = Block::from(3..=8);
        assert_eq!(block, blk(3, 8));

        let range: std::ops::RangeInclusive<i64> = blk(3, 8).into();
        assert_eq!(range, 3..=8);

        // Backwards ranges normalize.
        assert_eq!(Block::from(8..=3), blk(3, 8));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let block = blk(5, 10);

        match block.start_bound() {
            Bound::Included(&value) => assert_eq!(value, 5),
            _ => panic!("Wrong start bound"),
        }
        match block.end_bound() {
            Bound::Included(&value) => assert_eq!(value, 10),
            _ => panic!("Wrong end bound"),
        }
    }

    #[test]
    fn test_float_scale() {
        let block = Block::new(1.5, 4.5);
        assert_eq!(block.length(), 3.0);
        assert!(block.contains_point(4.5));
        assert_eq!(block.limited(Block::new(2.0, 9.0)), Ok(Block::new(2.0, 4.5)));
    }
}
