// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Last-in-first-out containers.
//!
//! This module provides:
//! - `Stack`: the LIFO contract
//! - `BoundedStack`: a stack whose capacity is fixed at construction
//! - `StackError`: failures raised by capacity and emptiness checks

pub mod bounded;

pub use bounded::{BoundedStack, StackIter};

use thiserror::Error;

/// Stack error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Capacity below zero was requested
    #[error("negative capacity is not allowed: {0}")]
    NegativeCapacity(i64),

    /// Push attempted on a full stack
    #[error("no space, stack is full (capacity {capacity})")]
    Overflow { capacity: usize },

    /// Pop or peek attempted on an empty stack
    #[error("stack is empty")]
    Underflow,
}

/// LIFO container contract
pub trait Stack<E> {
    /// Push an element onto the top
    fn push(&mut self, element: E) -> Result<(), StackError>;

    /// Remove and return the top element
    fn pop(&mut self) -> Result<E, StackError>;

    /// Borrow the top element
    fn peek(&self) -> Result<&E, StackError>;

    /// Number of stored elements
    fn len(&self) -> usize;

    /// Check if no elements are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drains any stack through the trait only
    fn drain<S: Stack<u32>>(stack: &mut S) -> Vec<u32> {
        let mut out = Vec::new();
        while let Ok(value) = stack.pop() {
            out.push(value);
        }
        out
    }

    #[test]
    fn test_trait_drain_is_lifo() {
        let mut stack = BoundedStack::new(3).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(drain(&mut stack), vec![3, 2, 1]);
        assert!(Stack::is_empty(&stack));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StackError::NegativeCapacity(-2).to_string(),
            "negative capacity is not allowed: -2"
        );
        assert_eq!(
            StackError::Overflow { capacity: 4 }.to_string(),
            "no space, stack is full (capacity 4)"
        );
        assert_eq!(StackError::Underflow.to_string(), "stack is empty");
    }
}
