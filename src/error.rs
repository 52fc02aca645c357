//! Error types for heap operations.

use std::fmt;

use crate::value::ValueKind;

/// Error type for heap operations
///
/// Absent elements are never errors: `pop`, `remove`, `replace` and `update`
/// signal absence through `Option`/`bool` return values. `HeapError` covers
/// the cases where the call itself is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The value's kind does not match the kind the heap is fixed to
    KindMismatch {
        /// The kind the heap accepts
        expected: ValueKind,
        /// The kind of the rejected value
        found: ValueKind,
    },
    /// A structural accessor was called with an index outside `[0, len)`
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KindMismatch { expected, found } => {
                write!(
                    f,
                    "invalid element kind: the heap holds {expected} values, received {found}"
                )
            }
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for heap of length {len}")
            }
        }
    }
}

impl std::error::Error for HeapError {}
