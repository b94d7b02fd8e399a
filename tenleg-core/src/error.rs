//! Errors of tensor construction and access.

use alloc::vec::Vec;
use thiserror::Error;

use crate::leg::Leg;

/// Precondition violations detected by the checked tensor API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// Number of dims, legs or position entries disagrees with the rank.
    #[error("rank mismatch: expected {expected}, found {found}")]
    RankMismatch {
        /// The rank required by the call.
        expected: usize,
        /// The length actually supplied.
        found: usize,
    },
    /// A positional coordinate is not below its axis extent.
    #[error("index {index} out of range for axis {axis} with extent {extent}")]
    IndexOutOfRange {
        /// Position of the offending axis.
        axis: usize,
        /// The supplied coordinate.
        index: usize,
        /// Extent of the axis.
        extent: usize,
    },
    /// A leg of the tensor has no entry in the supplied coordinate map.
    #[error("no coordinate given for {0:?}")]
    UnknownLeg(Leg),
    /// Operands (or a buffer and a shape) differ in total element count.
    #[error("shape mismatch: expected {expected} elements, found {found}")]
    ShapeMismatch {
        /// Element count required by the call.
        expected: usize,
        /// Element count actually supplied.
        found: usize,
    },
    /// The same leg appears twice where locally unique legs were requested.
    #[error("{0:?} appears more than once")]
    DuplicateLeg(Leg),
    /// The product of the extents does not fit in `usize`.
    #[error("element count of a tensor with extents {dims:?} overflows usize")]
    SizeOverflow {
        /// The offending extents.
        dims: Vec<usize>,
    },
}
