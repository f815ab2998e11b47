//! Capacity-bounded LIFO stack with oldest-eviction.
//!
//! ## Learning: VecDeque
//!
//! We use `VecDeque` instead of `Vec` because the bound needs efficient:
//! - Push to back (new snapshots)
//! - Pop from front (evicting the oldest entry at capacity)
//! - Pop from back (undo/redo)
//!
//! The back of the deque is the top of the stack.

use std::collections::VecDeque;

/// A last-in-first-out stack that never grows past a fixed capacity.
///
/// Pushing onto a full stack silently discards the oldest (bottom) entry
/// first; overflow is handled, never an error. Popping or peeking an empty
/// stack returns `None` rather than failing.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `capacity` entries.
    ///
    /// A capacity of zero is clamped to one; a stack that can hold nothing
    /// has no meaningful push/pop semantics.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an entry on top, evicting the oldest entry if already full.
    pub fn push(&mut self, item: T) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(item);
    }

    /// Removes and returns the top entry, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Returns the top entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Removes all entries. Idempotent on an empty stack.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the stack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates entries newest-first (top of stack first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().rev()
    }
}
