//! Polarity-configurable binary heap
//!
//! This crate provides a single array-backed binary heap that can be
//! constructed as either a max-heap or a min-heap, with the operations a
//! textbook heap usually omits: value-based removal, value-based update,
//! and root replacement.
//!
//! # Features
//!
//! - **[`BinaryHeap<T>`]**: generic heap over any `Ord` type, with push/pop/
//!   peek, `remove(&value)`, `update(&old, new)`, `replace(new)`, structural
//!   accessors (`parent`, `children`) and a level-per-line `Display` rendering
//! - **[`ValueHeap`]**: runtime-typed heap over [`Value`] (integers, floats,
//!   complex numbers, strings) where the first accepted element fixes the
//!   element kind and later mismatches are rejected atomically
//! - **Implicit tree encoding**: dense `Vec` backing, parent at `(i - 1) / 2`,
//!   children at `2i + 1` and `2i + 2`; no node allocations
//!
//! # Example
//!
//! ```rust
//! use polarity_heap::{BinaryHeap, Polarity};
//!
//! let mut heap = BinaryHeap::new(Polarity::Min);
//! heap.extend([10, 8, 5, 12, 7]);
//!
//! assert_eq!(heap.peek(), Some(&5));
//! assert_eq!(heap.remove(&8), Some(8));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(7));
//! ```

pub mod binary;
pub mod error;
pub mod value;

pub use binary::{BinaryHeap, Polarity};
pub use error::HeapError;
pub use value::{Value, ValueHeap, ValueKind};
