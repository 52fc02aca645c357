//! Array-backed binary heap with selectable polarity
//!
//! A dense `Vec`-backed binary heap using the implicit complete-tree encoding:
//! the element at index `i` has its parent at `(i - 1) / 2` and its children
//! at `2i + 1` and `2i + 2`. Whether the root holds the greatest or the
//! smallest element is chosen at construction via [`Polarity`] and never
//! changes for the heap's lifetime.
//!
//! Beyond the usual push/pop/peek surface, this heap supports value-based
//! removal and update: [`BinaryHeap::remove`] and [`BinaryHeap::update`]
//! locate an element by a linear equality scan rather than by handle. That is
//! a deliberate simplicity choice; callers that remove or re-prioritize by
//! value frequently should maintain their own value-to-index map externally.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log n)            |
//! | `pop`     | O(log n)            |
//! | `peek`    | O(1)                |
//! | `remove`  | O(n) scan + O(log n)|
//! | `update`  | O(n) scan + O(log n)|
//! | `replace` | O(log n)            |
//! | `extend`  | O(n log n)          |
//!
//! # Example
//!
//! ```rust
//! use polarity_heap::{BinaryHeap, Polarity};
//!
//! let mut heap = BinaryHeap::new(Polarity::Max);
//! heap.push(10);
//! heap.push(8);
//! heap.push(5);
//! heap.push(12);
//! heap.push(7);
//!
//! assert_eq!(heap.peek(), Some(&12));
//! assert_eq!(heap.pop(), Some(12));
//! assert_eq!(heap.pop(), Some(10));
//! assert_eq!(heap.len(), 3);
//! ```

use std::fmt;

use crate::error::HeapError;

/// Whether the root of the heap holds the greatest or the smallest element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Every parent is greater than or equal to both its children
    Max,
    /// Every parent is less than or equal to both its children
    Min,
}

impl Polarity {
    /// True if `a` must sit strictly above `b` in a heap of this polarity
    fn outranks<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Polarity::Max => a > b,
            Polarity::Min => a < b,
        }
    }
}

/// A binary heap over a dense element array
///
/// The heap-order invariant (no parent strictly dominated by a child under
/// the configured [`Polarity`]) and the completeness invariant (no gaps in
/// the backing array) hold whenever a public mutating call has returned.
///
/// The structure is single-owner and does no internal locking; wrap it in a
/// lock if it must be shared across threads.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    elements: Vec<T>,
    polarity: Polarity,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap with the given polarity
    pub fn new(polarity: Polarity) -> Self {
        Self {
            elements: Vec::new(),
            polarity,
        }
    }

    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::new(Polarity::Max)
    }

    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::new(Polarity::Min)
    }

    /// Creates an empty heap with space reserved for `capacity` elements
    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            polarity,
        }
    }

    /// Returns the polarity this heap was constructed with
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the root element without removing it, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the backing array in level order
    ///
    /// Index `i`'s children live at `2i + 1` and `2i + 2`; siblings are in
    /// no particular order relative to each other.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the heap and returns the backing array in level order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Iterates over the elements in level order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the parent of the element at index `i`
    ///
    /// The root has no parent, so `parent(0)` is `Ok(None)` rather than an
    /// error. Any other index outside `[0, len)` is rejected.
    pub fn parent(&self, i: usize) -> Result<Option<&T>, HeapError> {
        if i == 0 {
            return Ok(None);
        }
        self.check_index(i)?;
        Ok(Some(&self.elements[(i - 1) / 2]))
    }

    /// Returns the left child of the element at index `i`, or `Ok(None)` if
    /// the element is a leaf or has only the index arithmetic's right slot
    /// out of range
    pub fn left_child(&self, i: usize) -> Result<Option<&T>, HeapError> {
        self.check_index(i)?;
        Ok(self.elements.get(2 * i + 1))
    }

    /// Returns the right child of the element at index `i`, or `Ok(None)` if
    /// there is none
    pub fn right_child(&self, i: usize) -> Result<Option<&T>, HeapError> {
        self.check_index(i)?;
        Ok(self.elements.get(2 * i + 2))
    }

    /// Returns both children of the element at index `i`; a missing child is
    /// `None`, not an error
    pub fn children(&self, i: usize) -> Result<(Option<&T>, Option<&T>), HeapError> {
        self.check_index(i)?;
        Ok((self.elements.get(2 * i + 1), self.elements.get(2 * i + 2)))
    }

    /// Returns true if some element in the heap equals `value`
    ///
    /// Linear scan; only equality is used, never the heap order.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Inserts an element, restoring heap order by sifting it up
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the root element, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let root = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Removes the first element equal to `value` and returns it, or `None`
    /// if no element matches
    ///
    /// The vacated slot is filled with the last element, which is then sifted
    /// in whichever direction heap order requires. Sifting down alone is not
    /// enough: the last element comes from an arbitrary subtree and may
    /// outrank its new parent.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let i = self.elements.iter().position(|e| e == value)?;
        let removed = self.elements.swap_remove(i);
        if i < self.elements.len() {
            self.sift(i);
        }
        Some(removed)
    }

    /// Replaces the root with `value` and returns the old root, restoring
    /// heap order by sifting the new value down
    ///
    /// On an empty heap this returns `None` and `value` is discarded; use
    /// [`push`](Self::push) to insert into a possibly-empty heap.
    pub fn replace(&mut self, value: T) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let old = std::mem::replace(&mut self.elements[0], value);
        self.sift_down(0);
        Some(old)
    }

    /// Replaces the first element equal to `old` with `new`, returning true
    /// if a replacement happened
    ///
    /// The sift direction is decided by comparing `new` against `old`: a
    /// value that moved toward the root's end of the order sifts up,
    /// anything else sifts down. Given a valid heap, a single value change
    /// can only push the invariant out in one direction, so the single sift
    /// is sufficient.
    pub fn update(&mut self, old: &T, new: T) -> bool {
        let Some(i) = self.elements.iter().position(|e| e == old) else {
            return false;
        };
        let toward_root = self.polarity.outranks(&new, old);
        self.elements[i] = new;
        if toward_root {
            self.sift_up(i);
        } else {
            self.sift_down(i);
        }
        true
    }

    /// Removes every element; the polarity is retained
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn check_index(&self, i: usize) -> Result<(), HeapError> {
        if i >= self.elements.len() {
            return Err(HeapError::IndexOutOfBounds {
                index: i,
                len: self.elements.len(),
            });
        }
        Ok(())
    }

    /// Sift toward whichever end of the tree the element at `i` belongs
    fn sift(&mut self, i: usize) {
        if i > 0 && self.polarity.outranks(&self.elements[i], &self.elements[(i - 1) / 2]) {
            self.sift_up(i);
        } else {
            self.sift_down(i);
        }
    }

    /// Move the element at `index` up until its parent is not outranked
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.polarity.outranks(&self.elements[index], &self.elements[parent]) {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` down, always swapping with the child that
    /// outranks it the most
    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut top = index;

            if left < len && self.polarity.outranks(&self.elements[left], &self.elements[top]) {
                top = left;
            }
            if right < len && self.polarity.outranks(&self.elements[right], &self.elements[top]) {
                top = right;
            }

            if top != index {
                self.elements.swap(index, top);
                index = top;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    /// Inserts every element of `iter` in order
    ///
    /// Each element is pushed individually, so this is O(n log n), not a
    /// linear-time heapify.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    /// An empty max-heap
    fn default() -> Self {
        Self::max()
    }
}

/// Renders the heap one tree level per line, elements in index order
///
/// ```rust
/// use polarity_heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::max();
/// heap.extend([10, 8, 5, 12, 7]);
/// assert_eq!(heap.to_string(), "[12]\n[10][5]\n[8][7]");
/// ```
impl<T: Ord + fmt::Display> fmt::Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("- Empty heap -");
        }
        for (i, elem) in self.elements.iter().enumerate() {
            // depth of index i is floor(log2(i + 1))
            if i > 0 && (i + 1).ilog2() != i.ilog2() {
                f.write_str("\n")?;
            }
            write!(f, "[{elem}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_order_holds<T: Ord>(heap: &BinaryHeap<T>) -> bool {
        let s = heap.as_slice();
        (1..s.len()).all(|i| !heap.polarity().outranks(&s[i], &s[(i - 1) / 2]))
    }

    #[test]
    fn test_basic_max_operations() {
        let mut heap = BinaryHeap::max();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);

        heap.push(10);
        heap.push(8);
        heap.push(5);
        heap.push(12);
        heap.push(7);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&12));

        assert_eq!(heap.pop(), Some(12));
        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(heap.pop(), Some(10));
        assert_eq!(heap.pop(), Some(8));
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_basic_min_operations() {
        let mut heap = BinaryHeap::min();
        heap.extend([10, 8, 5, 12, 7]);

        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), Some(8));
        assert_eq!(heap.pop(), Some(10));
        assert_eq!(heap.pop(), Some(12));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_single_element_pop() {
        let mut heap = BinaryHeap::max();
        heap.push(42);
        assert_eq!(heap.pop(), Some(42));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_duplicates() {
        let mut heap = BinaryHeap::min();
        heap.extend([1, 1, 1]);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_contains() {
        let mut heap = BinaryHeap::max();
        heap.extend([12, 10, 5, 8, 7]);

        assert!(heap.contains(&5));
        assert!(!heap.contains(&99));
    }

    #[test]
    fn test_remove_interior() {
        let mut heap = BinaryHeap::max();
        heap.extend([12, 10, 5, 8, 7]);

        assert_eq!(heap.remove(&8), Some(8));
        assert_eq!(heap.len(), 4);
        assert!(heap_order_holds(&heap));
        assert!(!heap.contains(&8));
    }

    #[test]
    fn test_remove_root_and_last() {
        let mut heap = BinaryHeap::max();
        heap.extend([12, 10, 5, 8, 7]);

        assert_eq!(heap.remove(&12), Some(12));
        assert_eq!(heap.peek(), Some(&10));
        assert!(heap_order_holds(&heap));

        // last slot needs no repair at all
        let last = *heap.as_slice().last().unwrap();
        assert_eq!(heap.remove(&last), Some(last));
        assert!(heap_order_holds(&heap));
    }

    #[test]
    fn test_remove_missing() {
        let mut heap = BinaryHeap::max();
        heap.extend([12, 10, 5]);

        assert_eq!(heap.remove(&99), None);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_remove_replacement_outranks_new_parent() {
        // Removing from the shallow left subtree pulls 97 out of the deep
        // right subtree; 97 > 10 means the repair must sift up, not down.
        let mut heap = BinaryHeap::max();
        heap.extend([100, 10, 99, 9, 8, 98, 97]);
        assert_eq!(heap.as_slice(), &[100, 10, 99, 9, 8, 98, 97]);

        assert_eq!(heap.remove(&9), Some(9));
        assert!(heap_order_holds(&heap));
        assert!(heap.contains(&97));
    }

    #[test]
    fn test_replace() {
        let mut heap = BinaryHeap::max();
        heap.extend([10, 8, 5, 12]);

        assert_eq!(heap.replace(15), Some(12));
        assert_eq!(heap.peek(), Some(&15));
        assert!(heap_order_holds(&heap));

        assert_eq!(heap.replace(1), Some(15));
        assert_eq!(heap.peek(), Some(&10));
        assert!(heap_order_holds(&heap));
    }

    #[test]
    fn test_replace_empty() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::max();
        assert_eq!(heap.replace(15), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_update_toward_root() {
        let mut heap = BinaryHeap::max();
        heap.extend([10, 8, 5, 12]);

        assert!(heap.update(&8, 15));
        assert_eq!(heap.peek(), Some(&15));
        assert!(heap_order_holds(&heap));
    }

    #[test]
    fn test_update_toward_leaves() {
        let mut heap = BinaryHeap::max();
        heap.extend([10, 8, 5, 12]);

        assert!(heap.update(&12, 1));
        assert_eq!(heap.peek(), Some(&10));
        assert!(heap.contains(&1));
        assert!(heap_order_holds(&heap));
    }

    #[test]
    fn test_update_missing() {
        let mut heap = BinaryHeap::max();
        heap.extend([10, 8]);

        assert!(!heap.update(&99, 1));
        assert_eq!(heap.len(), 2);
        assert!(!heap.contains(&1));
    }

    #[test]
    fn test_structural_accessors() {
        let mut heap = BinaryHeap::max();
        heap.extend([10, 8, 5, 12, 7]);
        // level order: [12, 10, 5, 8, 7]

        assert_eq!(heap.parent(0), Ok(None));
        assert_eq!(heap.parent(3), Ok(Some(&10)));
        assert_eq!(heap.left_child(1), Ok(Some(&8)));
        assert_eq!(heap.right_child(1), Ok(Some(&7)));
        assert_eq!(heap.left_child(4), Ok(None));
        assert_eq!(heap.children(1), Ok((Some(&8), Some(&7))));
        assert_eq!(heap.children(4), Ok((None, None)));

        assert_eq!(
            heap.parent(6),
            Err(HeapError::IndexOutOfBounds { index: 6, len: 5 })
        );
        assert_eq!(
            heap.children(5),
            Err(HeapError::IndexOutOfBounds { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_display() {
        let mut heap = BinaryHeap::max();
        assert_eq!(heap.to_string(), "- Empty heap -");

        heap.extend([10, 8, 5, 12, 7]);
        assert_eq!(heap.to_string(), "[12]\n[10][5]\n[8][7]");
    }

    #[test]
    fn test_clear_retains_polarity() {
        let mut heap = BinaryHeap::min();
        heap.extend([3, 1, 2]);
        heap.clear();

        assert!(heap.is_empty());
        assert_eq!(heap.polarity(), Polarity::Min);

        heap.extend([3, 1, 2]);
        assert_eq!(heap.pop(), Some(1));
    }

    #[test]
    fn test_ascending_and_descending_insertion() {
        let mut heap = BinaryHeap::min();
        for i in 0..100 {
            heap.push(i);
        }
        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }

        for i in (0..100).rev() {
            heap.push(i);
        }
        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_string_elements() {
        let mut heap = BinaryHeap::min();
        heap.extend(["orange", "apple", "pear"]);

        assert_eq!(heap.pop(), Some("apple"));
        assert_eq!(heap.pop(), Some("orange"));
        assert_eq!(heap.pop(), Some("pear"));
    }
}
