//! FIFO queue backed by a `VecDeque`

use alloc::collections::vec_deque::{self, VecDeque};

use crate::container::Container;
use crate::error::{CoreError, Result};

/// First-in, first-out container
///
/// Elements enter at the tail and leave from the head. Both ends are O(1),
/// so a dequeue never shifts the remaining elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends an element at the tail.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the element at the head.
    ///
    /// Fails with [`CoreError::EmptyContainer`] on an empty queue.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(CoreError::EmptyContainer)
    }

    /// Borrows the element at the head without removing it.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(CoreError::EmptyContainer)
    }

    /// Returns true iff the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued elements.
    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from head to tail, i.e. in dequeue order.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for Queue<T> {
    fn insert(&mut self, item: T) {
        self.enqueue(item);
    }

    fn remove(&mut self) -> Result<T> {
        self.dequeue()
    }

    fn peek(&self) -> Result<&T> {
        self.front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    /// Consumes the queue, yielding elements in dequeue order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
