// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fixed-capacity stack.
//!
//! Capacity is set once at construction and never changes. Pushing onto a
//! full stack and popping or peeking an empty one are reported as errors
//! instead of growing or panicking. Iteration runs top to bottom and never
//! mutates the stack.

use std::iter::{FusedIterator, Rev};
use std::slice;

use tracing::{debug, warn};

use super::{Stack, StackError};

/// A LIFO container holding at most `capacity` elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<E> {
    /// Maximum number of elements
    capacity: usize,
    /// Stored elements, bottom first
    items: Vec<E>,
}

impl<E> BoundedStack<E> {
    /// Create an empty stack with the given capacity
    ///
    /// Fails with `StackError::NegativeCapacity` when `capacity < 0`.
    pub fn new(capacity: i64) -> Result<Self, StackError> {
        if capacity < 0 {
            return Err(StackError::NegativeCapacity(capacity));
        }
        // Storage grows on push; only the bound is fixed here
        Ok(Self {
            capacity: usize::try_from(capacity).unwrap_or(usize::MAX),
            items: Vec::new(),
        })
    }

    /// Get maximum number of elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get current number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if no more elements fit
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Push an element onto the top
    pub fn push(&mut self, element: E) -> Result<(), StackError> {
        if self.is_full() {
            warn!(capacity = self.capacity, "push rejected, stack is full");
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(element);
        debug!(len = self.items.len(), capacity = self.capacity, "pushed");
        Ok(())
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<E, StackError> {
        let element = self.items.pop().ok_or(StackError::Underflow)?;
        debug!(len = self.items.len(), capacity = self.capacity, "popped");
        Ok(element)
    }

    /// Borrow the top element without removing it
    pub fn peek(&self) -> Result<&E, StackError> {
        self.items.last().ok_or(StackError::Underflow)
    }

    /// Remove all elements, keeping the capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from top to bottom
    ///
    /// Every call starts again at the current top.
    pub fn iter(&self) -> StackIter<'_, E> {
        StackIter {
            inner: self.items.iter().rev(),
        }
    }
}

impl<E> Stack<E> for BoundedStack<E> {
    fn push(&mut self, element: E) -> Result<(), StackError> {
        BoundedStack::push(self, element)
    }

    fn pop(&mut self) -> Result<E, StackError> {
        BoundedStack::pop(self)
    }

    fn peek(&self) -> Result<&E, StackError> {
        BoundedStack::peek(self)
    }

    fn len(&self) -> usize {
        BoundedStack::len(self)
    }
}

/// Borrowing top-to-bottom iterator over a `BoundedStack`
#[derive(Debug, Clone)]
pub struct StackIter<'a, E> {
    inner: Rev<slice::Iter<'a, E>>,
}

impl<'a, E> Iterator for StackIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for StackIter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for StackIter<'_, E> {}

impl<E> FusedIterator for StackIter<'_, E> {}

impl<'a, E> IntoIterator for &'a BoundedStack<E> {
    type Item = &'a E;
    type IntoIter = StackIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iteration yields elements top to bottom
impl<E> IntoIterator for BoundedStack<E> {
    type Item = E;
    type IntoIter = Rev<std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{Genre, Song};

    #[test]
    fn test_new_stack_is_empty() {
        for capacity in [0, 1, 5] {
            let stack: BoundedStack<u8> = BoundedStack::new(capacity).unwrap();
            assert_eq!(stack.len(), 0);
            assert!(stack.is_empty());
            assert_eq!(stack.capacity(), capacity as usize);
        }
    }

    #[test]
    fn test_negative_capacity() {
        let result: Result<BoundedStack<u8>, _> = BoundedStack::new(-1);
        assert_eq!(result.unwrap_err(), StackError::NegativeCapacity(-1));
    }

    #[test]
    fn test_large_capacity_allocates_lazily() {
        let mut stack = BoundedStack::<u64>::new(i64::MAX).unwrap();
        assert_eq!(stack.capacity() as u64, i64::MAX as u64);
        assert!(!stack.is_full());

        stack.push(42).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Ok(42));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_overflow_at_capacity() {
        let mut stack = BoundedStack::new(2).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(stack.is_full());

        assert_eq!(stack.push('c'), Err(StackError::Overflow { capacity: 2 }));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Ok(&'b'));
    }

    #[test]
    fn test_zero_capacity_rejects_every_push() {
        let mut stack = BoundedStack::new(0).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(1), Err(StackError::Overflow { capacity: 0 }));
    }

    #[test]
    fn test_underflow() {
        let mut stack: BoundedStack<i32> = BoundedStack::new(3).unwrap();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.peek(), Err(StackError::Underflow));
    }

    #[test]
    fn test_push_pop_peek_sequence() {
        let mut stack = BoundedStack::new(4).unwrap();
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert_eq!(stack.peek(), Ok(&20));

        assert_eq!(stack.pop(), Ok(20));
        stack.push(30).unwrap();
        stack.push(40).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Ok(&40));

        assert_eq!(stack.pop(), Ok(40));
        assert_eq!(stack.pop(), Ok(30));
        assert_eq!(stack.pop(), Ok(10));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut source = BoundedStack::new(3).unwrap();
        source.push(Song::new("Africa", "Toto", Genre::Rock, 295)).unwrap();
        source.push(Song::new("Rosanna", "Toto", Genre::Rock, 331)).unwrap();

        let mut copy = source.clone();
        assert_eq!(copy, source);
        assert_eq!(copy.capacity(), 3);

        copy.pop().unwrap();
        copy.push(Song::new("Hold the Line", "Toto", Genre::Rock, 236)).unwrap();
        copy.push(Song::new("Pamela", "Toto", Genre::Rock, 311)).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(source.peek().unwrap().name(), "Rosanna");
        assert_eq!(source.peek().unwrap().duration(), 331);
    }

    #[test]
    fn test_iter_top_to_bottom_and_restartable() {
        let mut stack = BoundedStack::new(3).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        let first: Vec<_> = stack.iter().copied().collect();
        let second: Vec<_> = (&stack).into_iter().copied().collect();
        assert_eq!(first, vec![3, 2, 1]);
        assert_eq!(second, first);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.iter().len(), 3);

        stack.pop().unwrap();
        let after_pop: Vec<_> = stack.iter().copied().collect();
        assert_eq!(after_pop, vec![2, 1]);
    }

    #[test]
    fn test_into_iter_consumes_top_first() {
        let mut stack = BoundedStack::new(2).unwrap();
        stack.push("bottom").unwrap();
        stack.push("top").unwrap();

        let drained: Vec<_> = stack.into_iter().collect();
        assert_eq!(drained, vec!["top", "bottom"]);
    }

    #[test]
    fn test_clear() {
        let mut stack = BoundedStack::new(2).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 2);
        stack.push(3).unwrap();
        assert_eq!(stack.peek(), Ok(&3));
    }
}
