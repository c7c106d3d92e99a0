//! Common traits for priority queue implementations
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: the base contract of `push`/`pop`/`peek`/`len` plus
//!   the [`update_priorities`](PriorityQueue::update_priorities) repair hook
//! - [`AddressableQueue`]: extended contract adding handle-returning
//!   insertion and `decrease_key`
//!
//! The base trait covers the workloads a `BinaryHeap`-style queue can serve,
//! while [`AddressableQueue`] adds the operations needed by algorithms that
//! update priorities of elements already enqueued, such as Dijkstra's
//! shortest path.

use std::fmt;

/// Error type for handle-based queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The handle does not refer to a live element of this queue
    /// (the element was already popped, or the handle came from a
    /// different queue instance).
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidHandle => {
                write!(f, "handle does not refer to a live element of this queue")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the queue, used for `decrease_key`
///
/// This is an opaque identifier for a specific element. Handles remain valid
/// across every mutation of *other* elements; a handle is invalidated only
/// when its own element is removed by `pop`.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for priority queue implementations
///
/// The element ordered first by the queue's comparator is the most extreme
/// and is the one returned by `peek` and `pop`. With the natural ordering
/// this is the minimum.
///
/// # Example
///
/// ```rust
/// use pairing_pq::{PairingHeap, PriorityQueue};
///
/// let mut queue = PairingHeap::new();
/// queue.push(3);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.pop(), Some(1));
/// ```
pub trait PriorityQueue<T> {
    /// Inserts an element.
    fn push(&mut self, value: T);

    /// Removes and returns the most extreme element, or `None` if the
    /// queue is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns the most extreme element without removing it, or `None` if
    /// the queue is empty.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-establishes the internal ordering after element priorities have
    /// been changed through means the queue cannot observe.
    ///
    /// Implementations must preserve element identities: no element is
    /// removed or re-created, and outstanding handles stay valid.
    fn update_priorities(&mut self);
}

/// Extended queue trait with handle-based `decrease_key` support
///
/// # Example
///
/// ```rust
/// use pairing_pq::{AddressableQueue, PairingHeap, PriorityQueue};
///
/// let mut queue = PairingHeap::new();
/// let handle = queue.push_with_handle(10);
/// queue.push(5);
/// queue.decrease_key(handle, 1).unwrap();
/// assert_eq!(queue.peek(), Some(&1));
/// ```
pub trait AddressableQueue<T>: PriorityQueue<T> {
    /// The handle type for this queue
    type Handle: Handle;

    /// Inserts an element, returning a handle usable later with
    /// [`decrease_key`](AddressableQueue::decrease_key).
    fn push_with_handle(&mut self, value: T) -> Self::Handle;

    /// Replaces the element identified by `handle` with `value`.
    ///
    /// The new value must compare at least as extreme as the element's
    /// current value; this precondition is the caller's responsibility and
    /// is not checked. Supplying a less extreme value silently corrupts the
    /// queue's ordering.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidHandle`] if the handle's element is no
    /// longer in the queue.
    fn decrease_key(&mut self, handle: Self::Handle, value: T) -> Result<(), HeapError>;
}
