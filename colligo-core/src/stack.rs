//! LIFO stack backed by a `Vec`
//!
//! ```text
//! push(x): items[N] = x, N' = N + 1      O(1) amortised
//! pop():   N' = N - 1, returns items[N-1] O(1)
//! peek():  returns &items[N-1]            O(1)
//! ```

use alloc::vec::Vec;
use core::iter::Rev;

use crate::container::Container;
use crate::error::{CoreError, Result};

/// Last-in, first-out container
///
/// The stack exclusively owns its elements; [`pop`](Self::pop) hands
/// ownership of the removed element to the caller. It is not synchronized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an element on top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`CoreError::EmptyContainer`] on an empty stack, every time
    /// it is called.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(CoreError::EmptyContainer)
    }

    /// Borrows the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(CoreError::EmptyContainer)
    }

    /// Mutably borrows the top element without removing it.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.items.last_mut().ok_or(CoreError::EmptyContainer)
    }

    /// Returns true iff the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements on the stack.
    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for Stack<T> {
    fn insert(&mut self, item: T) {
        self.push(item);
    }

    fn remove(&mut self) -> Result<T> {
        self.pop()
    }

    fn peek(&self) -> Result<&T> {
        Stack::peek(self)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items in iteration order, so the last item ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = Rev<alloc::vec::IntoIter<T>>;

    /// Consumes the stack, yielding elements in pop order (top first).
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
