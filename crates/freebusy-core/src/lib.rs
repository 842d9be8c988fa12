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

//! # Freebusy Core
//!
//! Closed numeric interval primitives for free/busy scheduling. This crate
//! provides the `Block<T>` value type — an immutable closed interval
//! `[start, end]` on an ordered numeric scale — together with the interval
//! algebra higher-level scheduling logic is built on.
//!
//! ## Modules
//!
//! - `block`: The `Block<T>` type with normalizing/fallible/unchecked
//!   construction, relational predicates (containment, strict and non-strict
//!   coverage, directional and general overlap), derivations (bounding
//!   union, split, trimming, intersection via `limited`, outward padding),
//!   the single-block set algebra (`add`/`+`, `subtract`/`-`, the historic
//!   `subtract_legacy` cascade, and the sequence form `subtract_all`), and
//!   conversions to/from `std::ops::RangeInclusive`.
//! - `merge`: Batch reduction of block collections to the minimal,
//!   start-sorted, pairwise-disjoint covering set, in allocating and
//!   in-place forms, plus the `is_merged` canonical-form check.
//! - `error`: The `BlockError` taxonomy for the few fallible operations.
//! - `num`: The `BlockNumeric` trait alias collecting the scalar bounds.
//!
//! ## Purpose
//!
//! Callers project domain values (typically timestamps) onto a linear
//! numeric scale, run the block algebra, and interpret the resulting blocks
//! themselves. Calendars, timezones, persistence, and scheduling policy are
//! deliberately out of scope; every operation here is a pure computation
//! over immutable values and is safe to evaluate concurrently without
//! coordination.
//!
//! Refer to each module for detailed APIs and examples.

pub mod block;
pub mod error;
pub mod merge;
pub mod num;
