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

//! Error taxonomy for the block algebra.
//!
//! The algebra is total over well-formed blocks; the few operations that can
//! fail do so explicitly and locally, reporting to the immediate caller
//! rather than propagating malformed values. Nothing here is transient, so
//! nothing is ever retried.

/// The error type for fallible block operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// Construction was given endpoint values that cannot be ordered
    /// (e.g. a `NaN` on a float scale).
    InvalidInterval,
    /// An intersection was requested between blocks that do not overlap;
    /// the result would violate the `start <= end` invariant.
    EmptyIntersection,
    /// The sequence form of subtraction could not find the four boundary
    /// points it needs to rebuild its two result blocks.
    InsufficientBoundaryPoints {
        /// How many qualifying boundary points were found.
        found: usize,
    },
}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval => {
                write!(f, "Block endpoints cannot be ordered")
            }
            Self::EmptyIntersection => {
                write!(f, "Blocks do not overlap, intersection would be empty")
            }
            Self::InsufficientBoundaryPoints { found } => {
                write!(
                    f,
                    "Expected 4 boundary points inside the block, found {}",
                    found
                )
            }
        }
    }
}

impl std::error::Error for BlockError {}
