//! # Stack
//!
//! A last-in-first-out container backed by a `Vec`.
//!
//! ```text
//!   push(3)        pop() → 3
//!     │               ▲
//!     ▼               │
//!  ┌─────┐         ┌─────┐
//!  │  3  │ ◄─ top  │  3  │
//!  ├─────┤         ├─────┤
//!  │  2  │         │  2  │
//!  ├─────┤         ├─────┤
//!  │  1  │         │  1  │
//!  └─────┘         └─────┘
//! ```
//!
//! `pop` and `peek` on an empty stack return [`StackError::Empty`].
//! There is no internal locking; wrap the stack in a mutex to share it.
//!
//! ## Example
//! ```rust
//! use shopkit_core::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.size(), 1);
//! ```

use crate::error::StackError;

/// LIFO stack exclusively owning its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Pushes an item on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Number of items currently on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
