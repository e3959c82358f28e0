//! Shared contract of the sequence containers
//!
//! [`Stack`](crate::Stack) and [`Queue`](crate::Queue) store their elements
//! in a growable ordered sequence and differ only in which end removal takes
//! from. This trait captures the common shape so generic code can drain
//! either one.

use crate::error::Result;

/// A growable container with a well-defined failure when empty
///
/// Implementations must uphold:
/// - `insert` always succeeds and increases `len` by one
/// - `remove` and `peek` fail with
///   [`CoreError::EmptyContainer`](crate::CoreError::EmptyContainer) when
///   `len() == 0`, leaving the container untouched
/// - `len` counts live elements only
pub trait Container<T> {
    /// Adds an element at the tail.
    fn insert(&mut self, item: T);

    /// Removes the next element in this container's removal order.
    fn remove(&mut self) -> Result<T>;

    /// Borrows the element `remove` would return next.
    fn peek(&self) -> Result<&T>;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Returns true iff the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element, returning them in removal order.
    fn drain_all(&mut self) -> alloc::vec::Vec<T> {
        let mut drained = alloc::vec::Vec::with_capacity(self.len());
        while let Ok(item) = self.remove() {
            drained.push(item);
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, Queue, Stack};

    fn fill<C: Container<i32>>(container: &mut C, items: &[i32]) {
        for &item in items {
            container.insert(item);
        }
    }

    #[test]
    fn test_generic_drain_order() {
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        fill(&mut stack, &[1, 2, 3]);
        fill(&mut queue, &[1, 2, 3]);

        assert_eq!(stack.drain_all(), vec![3, 2, 1]);
        assert_eq!(queue.drain_all(), vec![1, 2, 3]);
        assert!(Container::is_empty(&stack));
        assert!(Container::is_empty(&queue));
    }

    #[test]
    fn test_generic_empty_contract() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(Container::remove(&mut stack), Err(CoreError::EmptyContainer));
        assert_eq!(Container::peek(&stack), Err(CoreError::EmptyContainer));
        assert_eq!(Container::len(&stack), 0);
    }
}
