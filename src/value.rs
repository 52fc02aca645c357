//! Runtime-typed heap elements
//!
//! [`Value`] is a tagged union over the comparable element kinds a
//! [`ValueHeap`] accepts: signed integers, floats, complex numbers and
//! strings. [`ValueHeap`] wraps the generic [`BinaryHeap`] and enforces kind
//! homogeneity at run time: the heap's kind starts unset (or is pre-fixed at
//! construction), the first accepted element fixes it, and every later
//! element must match it or the call fails before any mutation.
//!
//! Floats are ordered by [`f64::total_cmp`], so NaN participates in the
//! order instead of poisoning comparisons. Complex numbers are ordered
//! lexicographically by `(re, im)`, which is a total order even though it is
//! not algebraically meaningful; it exists so that heaps of complex values
//! are well-defined rather than undefined behavior.
//!
//! # Example
//!
//! ```rust
//! use polarity_heap::{Polarity, Value, ValueHeap, ValueKind};
//!
//! let mut heap = ValueHeap::new(Polarity::Max);
//! heap.push(10).unwrap();
//! heap.push(12).unwrap();
//! assert_eq!(heap.kind(), Some(ValueKind::Int));
//! assert!(heap.push("apple").is_err());
//! assert_eq!(heap.pop(), Some(Value::Int(12)));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::binary::{BinaryHeap, Polarity};
use crate::error::HeapError;

/// The element kind a [`ValueHeap`] is (or may become) fixed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// Signed integers
    Int,
    /// IEEE-754 doubles, totally ordered by `total_cmp`
    Float,
    /// Complex numbers, totally ordered lexicographically by `(re, im)`
    Complex,
    /// UTF-8 strings, lexicographic order
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Complex => "complex",
            ValueKind::Str => "string",
        };
        f.write_str(name)
    }
}

/// A single runtime-typed heap element
///
/// Every `Value` is one of the supported comparable kinds by construction;
/// there is no way to smuggle an unorderable value into a [`ValueHeap`].
/// Values of different kinds compare by kind tag so that `Ord` is lawful,
/// but the heap's admission gate keeps mixed kinds out, so cross-kind
/// comparison never decides heap order.
#[derive(Debug, Clone)]
pub enum Value {
    /// A signed integer
    Int(i64),
    /// A float
    Float(f64),
    /// A complex number as `(re, im)`
    Complex(f64, f64),
    /// A string
    Str(String),
}

impl Value {
    /// Returns the kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Complex(_, _) => ValueKind::Complex,
            Value::Str(_) => ValueKind::Str,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Complex(ar, ai), Value::Complex(br, bi)) => {
                ar.total_cmp(br).then(ai.total_cmp(bi))
            }
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Complex(re, im) => write!(f, "{re}{im:+}i"),
            Value::Str(v) => f.write_str(v),
        }
    }
}

/// A binary heap of [`Value`]s with run-time kind homogeneity
///
/// Wraps [`BinaryHeap<Value>`] and adds the admission gate: once the heap's
/// kind is fixed (by construction or by the first accepted element), any
/// value of another kind is rejected with [`HeapError::KindMismatch`] before
/// the heap is touched. [`clear`](Self::clear) empties the elements but
/// retains both the polarity and the fixed kind.
#[derive(Debug, Clone)]
pub struct ValueHeap {
    inner: BinaryHeap<Value>,
    kind: Option<ValueKind>,
}

impl ValueHeap {
    /// Creates an empty heap whose kind will be fixed by the first element
    pub fn new(polarity: Polarity) -> Self {
        Self {
            inner: BinaryHeap::new(polarity),
            kind: None,
        }
    }

    /// Creates an empty heap pre-fixed to the given kind
    pub fn with_kind(polarity: Polarity, kind: ValueKind) -> Self {
        Self {
            inner: BinaryHeap::new(polarity),
            kind: Some(kind),
        }
    }

    /// Returns the kind this heap is fixed to, or `None` if no element has
    /// been accepted yet
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// Returns the polarity this heap was constructed with
    pub fn polarity(&self) -> Polarity {
        self.inner.polarity()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the root element without removing it, or `None` if empty
    pub fn peek(&self) -> Option<&Value> {
        self.inner.peek()
    }

    /// Returns the backing array in level order
    pub fn as_slice(&self) -> &[Value] {
        self.inner.as_slice()
    }

    /// Returns the parent of the element at index `i`; see
    /// [`BinaryHeap::parent`]
    pub fn parent(&self, i: usize) -> Result<Option<&Value>, HeapError> {
        self.inner.parent(i)
    }

    /// Returns the left child of the element at index `i`
    pub fn left_child(&self, i: usize) -> Result<Option<&Value>, HeapError> {
        self.inner.left_child(i)
    }

    /// Returns the right child of the element at index `i`
    pub fn right_child(&self, i: usize) -> Result<Option<&Value>, HeapError> {
        self.inner.right_child(i)
    }

    /// Returns both children of the element at index `i`
    pub fn children(&self, i: usize) -> Result<(Option<&Value>, Option<&Value>), HeapError> {
        self.inner.children(i)
    }

    /// Returns true if some element equals `value`; linear scan
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        self.inner.contains(&value.into())
    }

    /// Inserts an element, fixing the heap's kind if it was unset
    ///
    /// # Errors
    /// [`HeapError::KindMismatch`] if the heap is fixed to another kind; the
    /// heap is unmodified in that case.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), HeapError> {
        let value = value.into();
        self.admit(&value)?;
        self.kind = Some(value.kind());
        self.inner.push(value);
        Ok(())
    }

    /// Removes and returns the root element, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<Value> {
        self.inner.pop()
    }

    /// Removes the first element equal to `value` and returns it, or `None`
    /// if no element matches
    pub fn remove(&mut self, value: impl Into<Value>) -> Option<Value> {
        self.inner.remove(&value.into())
    }

    /// Replaces the root with `value` and returns the old root
    ///
    /// On an empty heap this returns `Ok(None)` and `value` is discarded.
    ///
    /// # Errors
    /// [`HeapError::KindMismatch`] if `value`'s kind does not match the
    /// heap's fixed kind. The check runs before the root is touched.
    pub fn replace(&mut self, value: impl Into<Value>) -> Result<Option<Value>, HeapError> {
        let value = value.into();
        self.admit(&value)?;
        Ok(self.inner.replace(value))
    }

    /// Replaces the first element equal to `old` with `new`, returning
    /// `Ok(true)` if a replacement happened
    ///
    /// # Errors
    /// [`HeapError::KindMismatch`] if `new`'s kind does not match the heap's
    /// fixed kind, before any scan or mutation.
    pub fn update(
        &mut self,
        old: impl Into<Value>,
        new: impl Into<Value>,
    ) -> Result<bool, HeapError> {
        let new = new.into();
        self.admit(&new)?;
        Ok(self.inner.update(&old.into(), new))
    }

    /// Inserts every element of `values` in order, after validating the
    /// whole batch
    ///
    /// Validation covers both the heap's fixed kind (if any) and internal
    /// consistency of the batch itself: even on a fresh heap, a batch mixing
    /// kinds is rejected, naming the first offending element's kind. On any
    /// error the heap is left exactly as it was.
    ///
    /// Each element is then pushed individually, O(n log n) in the batch
    /// size; this is not a linear-time heapify.
    pub fn build_from_unsorted<I>(&mut self, values: I) -> Result<(), HeapError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();

        let mut expected = self.kind;
        for value in &values {
            match expected {
                Some(kind) if kind != value.kind() => {
                    return Err(HeapError::KindMismatch {
                        expected: kind,
                        found: value.kind(),
                    });
                }
                Some(_) => {}
                None => expected = Some(value.kind()),
            }
        }

        for value in values {
            self.kind = Some(value.kind());
            self.inner.push(value);
        }
        Ok(())
    }

    /// Removes every element; the polarity and the fixed kind are retained
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    fn admit(&self, value: &Value) -> Result<(), HeapError> {
        match self.kind {
            Some(kind) if kind != value.kind() => Err(HeapError::KindMismatch {
                expected: kind,
                found: value.kind(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ValueHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
