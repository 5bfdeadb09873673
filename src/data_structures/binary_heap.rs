// https://en.wikipedia.org/wiki/Binary_heap

use std::cmp::Ordering;
use std::fmt;

use crate::common::error::EmptyHeapError;

/// A binary min-heap ordered by a caller-supplied comparison function.
///
/// Unlike [std::collections::BinaryHeap], the ordering is not tied to an
/// [Ord] impl on the element type, and queued elements can be located and
/// re-sorted in place after their priority drops. That is the decrease-key
/// operation A* relies on.
///
/// The comparator must be a total order. An inconsistent comparator won't
/// cause undefined behavior, but the heap order becomes unspecified.
///
/// # Example
/// ```rust
/// use grid_pathfinding::BinaryHeap;
///
/// let mut heap = BinaryHeap::new(|a: &u32, b: &u32| a.cmp(b));
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
///
/// assert_eq!(heap.delete_root(), Ok(1));
/// assert_eq!(heap.delete_root(), Ok(3));
/// assert_eq!(heap.delete_root(), Ok(5));
/// assert!(heap.delete_root().is_err());
/// ```
pub struct BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    cmp: C,
    array: Vec<T>,
}

impl<T, C> BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap sorted by `cmp`. Elements that compare [Ordering::Less]
    /// are removed first.
    pub fn new(cmp: C) -> Self {
        Self {
            cmp,
            array: Vec::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        Self {
            cmp,
            array: Vec::with_capacity(capacity),
        }
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Returns the element that [delete_root](Self::delete_root) would remove next.
    pub fn peek(&self) -> Option<&T> {
        self.array.first()
    }

    /// Stores a new element in the heap.
    pub fn insert(&mut self, item: T) {
        self.array.push(item);
        self.bubble_up(self.array.len() - 1);
    }

    /// Removes the heap's root element and returns it. The root is whatever
    /// sorts first according to the comparator.
    ///
    /// Returns [EmptyHeapError] if the heap has no elements.
    pub fn delete_root(&mut self) -> Result<T, EmptyHeapError> {
        let last = self.array.pop().ok_or(EmptyHeapError)?;
        if self.array.is_empty() {
            return Ok(last);
        }

        let root = std::mem::replace(&mut self.array[0], last);
        self.bubble_down(0);
        Ok(root)
    }

    /// Searches the heap for an element equal to `item`, returning its current
    /// position.
    ///
    /// This is a linear scan. Elements standing in for a node should compare
    /// equal by node identity only, so a node can be found after its priority
    /// has changed.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.array.iter().position(|queued| queued == item)
    }

    /// Mutable access to the element at `pos`.
    ///
    /// The element may only be changed so that it sorts earlier than before,
    /// and [bubble_up](Self::bubble_up) must then be called with the same
    /// position to restore heap order.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.array.get_mut(pos)
    }

    /// Moves the element at `pos` toward the root until it no longer sorts
    /// before its parent.
    ///
    /// Out-of-range positions are ignored.
    pub fn bubble_up(&mut self, mut pos: usize) {
        if pos >= self.array.len() {
            return;
        }

        while pos > 0 {
            let parent = parent_index(pos);
            if (self.cmp)(&self.array[pos], &self.array[parent]) != Ordering::Less {
                break;
            }
            self.array.swap(pos, parent);
            pos = parent;
        }
    }

    fn bubble_down(&mut self, mut pos: usize) {
        let len = self.array.len();
        loop {
            let left = first_child_index(pos);
            let right = left + 1;
            let mut smallest = pos;

            if left < len && (self.cmp)(&self.array[left], &self.array[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && (self.cmp)(&self.array[right], &self.array[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == pos {
                break;
            }

            self.array.swap(pos, smallest);
            pos = smallest;
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.array.clear();
    }

    /// Iterates the elements in heap-array order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("array", &self.array)
            .finish_non_exhaustive()
    }
}

pub(crate) const fn parent_index(i: usize) -> usize {
    (i - 1) / 2
}

pub(crate) const fn first_child_index(i: usize) -> usize {
    2 * i + 1
}
