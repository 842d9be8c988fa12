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

//! # Block Numeric Trait
//!
//! Unified numeric bounds for the block algebra. `BlockNumeric` specifies the
//! scalar capabilities required by `Block<T>`: arithmetic via `num_traits::Num`,
//! ordering comparisons, cheap copying, and formatting for diagnostics.
//!
//! ## Motivation
//!
//! Scheduling callers project their domain values (timestamps, slot indices,
//! offsets) onto whatever numeric scale suits them. The algebra should remain
//! generic over that choice while keeping generic signatures short, so the
//! necessary bounds are collected into a single alias.
//!
//! Note that only `PartialOrd` is required: float scales (where `NaN` exists)
//! qualify, and the fallible construction path of `Block` rejects endpoints
//! that cannot be ordered. Totally ordered scalars additionally unlock the
//! `Eq`, `Ord`, and `Hash` impls on `Block<T>`.

use num_traits::Num;
use std::fmt::{Debug, Display};

/// A trait alias for scalar types that can serve as block endpoints.
///
/// These are usually the primitive integer and float types (`i32`, `i64`,
/// `f64`, ...), but any numeric type satisfying the bounds works.
pub trait BlockNumeric: Num + PartialOrd + Copy + Debug + Display {}

impl<T> BlockNumeric for T where T: Num + PartialOrd + Copy + Debug + Display {}
