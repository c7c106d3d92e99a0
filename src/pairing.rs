//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) amortized insert
//! - O(log n) amortized pop
//! - o(log n) amortized decrease_key (in fact, better than log n)
//! - O(n) bulk priority rebuild
//!
//! The pairing heap is simpler than Fibonacci heaps while still providing
//! excellent amortized performance for decrease_key-heavy workloads.
//!
//! Nodes live in a slotmap arena and refer to each other through generational
//! keys rather than raw pointers. The key doubles as the public element
//! handle: it stays valid across every structural rewiring and is invalidated
//! only when its own element is popped, at which point it becomes detectably
//! stale instead of dangling.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use compare::{natural, Compare, Natural};
use slotmap::{new_key_type, SlotMap};

use crate::traits::{AddressableQueue, Handle, HeapError, PriorityQueue};

new_key_type! {
    /// Handle to an element in a [`PairingHeap`].
    ///
    /// Returned by [`PairingHeap::push_with_handle`] and accepted by
    /// [`PairingHeap::decrease_key`] and [`PairingHeap::get`]. A handle stays
    /// valid until its element is removed by [`PairingHeap::pop`]; using it
    /// afterwards reports [`HeapError::InvalidHandle`] rather than touching
    /// another element.
    pub struct NodeHandle;
}

impl Handle for NodeHandle {}

/// A tree node. `prev` carries double duty: for a leftmost child it names
/// the parent, for any other node its immediate left sibling. That single
/// back-link is what makes O(1) excision possible in `decrease_key`.
struct Node<T> {
    elt: T,
    child: Option<NodeHandle>,
    sibling: Option<NodeHandle>,
    prev: Option<NodeHandle>,
}

impl<T> Node<T> {
    fn new(elt: T) -> Self {
        Node {
            elt,
            child: None,
            sibling: None,
            prev: None,
        }
    }
}

/// Pairing Heap
///
/// An addressable priority queue: insertion returns a [`NodeHandle`] that can
/// later be used to make that element more extreme in place. The element the
/// comparator orders first is the most extreme; with the default
/// [`Natural`] comparator the heap is min-first, and a reversing comparator
/// turns it into a max-first queue.
///
/// # Example
///
/// ```rust
/// use pairing_pq::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let handle = heap.push_with_handle(5);
/// heap.push(3);
/// heap.decrease_key(handle, 1).unwrap();
/// assert_eq!(heap.peek(), Some(&1));
/// ```
pub struct PairingHeap<T, C: Compare<T> = Natural<T>> {
    nodes: SlotMap<NodeHandle, Node<T>>,
    root: Option<NodeHandle>,
    compare: C,
}

impl<T: Ord> PairingHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural ordering (min-first).
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }
}

impl<T, C: Compare<T> + Default> Default for PairingHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator.
    ///
    /// The element the comparator orders first is the one `peek` and `pop`
    /// return.
    pub fn with_comparator(compare: C) -> Self {
        PairingHeap {
            nodes: SlotMap::with_key(),
            root: None,
            compare,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the most extreme element, or `None` if the heap is empty.
    ///
    /// O(1), no mutation.
    pub fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].elt)
    }

    /// Returns the element a handle refers to, or `None` if that element is
    /// no longer in the heap.
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        self.nodes.get(handle).map(|node| &node.elt)
    }

    /// Inserts an element. O(1).
    pub fn push(&mut self, value: T) {
        self.push_with_handle(value);
    }

    /// Inserts an element, returning a handle for later use with
    /// [`decrease_key`](PairingHeap::decrease_key). O(1).
    pub fn push_with_handle(&mut self, value: T) -> NodeHandle {
        let handle = self.nodes.insert(Node::new(value));
        self.root = self.meld(self.root, Some(handle));
        handle
    }

    /// Removes and returns the most extreme element, or `None` if the heap
    /// is empty. Amortized O(log n).
    ///
    /// Exactly one element leaves the heap; every other handle stays valid.
    pub fn pop(&mut self) -> Option<T> {
        let old_root = self.root?;

        // Detach the root's children into an ordered list of independent
        // trees, severing their sibling links as they are collected.
        let mut pending = VecDeque::new();
        let mut cursor = self.nodes[old_root].child;
        while let Some(handle) = cursor {
            let node = &mut self.nodes[handle];
            cursor = node.sibling.take();
            node.prev = None;
            pending.push_back(handle);
        }

        // Multi-pass pairing: meld the two front trees and requeue the
        // winner until a single tree remains. Pairing front-to-back (rather
        // than folding everything onto one tree) is what gives pop its
        // amortized logarithmic bound.
        while pending.len() > 1 {
            if let (Some(a), Some(b)) = (pending.pop_front(), pending.pop_front()) {
                let winner = self.link(a, b);
                pending.push_back(winner);
            }
        }

        self.root = pending.pop_front();
        self.nodes.remove(old_root).map(|node| node.elt)
    }

    /// Replaces the element at `handle` with `value`, which must compare at
    /// least as extreme as the current element. Amortized O(1).
    ///
    /// The precondition on `value` is the caller's responsibility and is not
    /// checked; violating it silently breaks the heap order, after which the
    /// pop sequence is unspecified until the next
    /// [`update_priorities`](PairingHeap::update_priorities).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidHandle`] if the handle's element was
    /// already popped or the handle belongs to another heap.
    pub fn decrease_key(&mut self, handle: NodeHandle, value: T) -> Result<(), HeapError> {
        match self.nodes.get_mut(handle) {
            Some(node) => node.elt = value,
            None => return Err(HeapError::InvalidHandle),
        }
        // The root has no parent to violate heap order with.
        if self.root != Some(handle) {
            self.excise(handle);
            self.root = self.meld(self.root, Some(handle));
        }
        Ok(())
    }

    /// Re-establishes heap order after elements have been reordered through
    /// means the heap cannot observe (interior mutability, for instance).
    /// O(n).
    ///
    /// Every node is detached and re-melded in place; no element is removed
    /// or re-created, so outstanding handles remain valid.
    pub fn update_priorities(&mut self) {
        let Some(old_root) = self.root.take() else {
            return;
        };

        // Explicit work list; recursing over child/sibling chains could
        // overflow the stack on the skewed trees pairing heaps can produce.
        let mut worklist = vec![old_root];
        while let Some(handle) = worklist.pop() {
            let node = &mut self.nodes[handle];
            if let Some(child) = node.child.take() {
                worklist.push(child);
            }
            if let Some(sibling) = node.sibling.take() {
                worklist.push(sibling);
            }
            node.prev = None;
            self.root = self.meld(self.root, Some(handle));
        }
    }

    /// Moves every element of `other` into `self`, consuming it. O(n) in the
    /// size of `other`.
    ///
    /// Handles issued by `other` do not carry over to `self`.
    pub fn merge(&mut self, mut other: Self) {
        for (_, node) in other.nodes.drain() {
            let handle = self.nodes.insert(Node::new(node.elt));
            self.root = self.meld(self.root, Some(handle));
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Visits every element in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.values().map(|node| &node.elt)
    }

    /// Combines two trees, either of which may be absent. The sole structural
    /// primitive: every mutation of parent/child/sibling relationships
    /// between trees funnels through here (via [`link`](Self::link)).
    fn meld(&mut self, a: Option<NodeHandle>, b: Option<NodeHandle>) -> Option<NodeHandle> {
        match (a, b) {
            (None, other) | (other, None) => other,
            (Some(a), Some(b)) => Some(self.link(a, b)),
        }
    }

    /// Links two tree roots, returning the winner. The loser becomes the
    /// winner's new leftmost child, its sibling link taking over the winner's
    /// previous child list. Ties go to `a`. O(1), no traversal.
    fn link(&mut self, a: NodeHandle, b: NodeHandle) -> NodeHandle {
        let ordering = self.compare.compare(&self.nodes[a].elt, &self.nodes[b].elt);
        let (winner, loser) = if ordering == Ordering::Greater {
            (b, a)
        } else {
            (a, b)
        };

        let displaced = self.nodes[winner].child.replace(loser);
        {
            let node = &mut self.nodes[loser];
            node.sibling = displaced;
            node.prev = Some(winner);
        }
        if let Some(sibling) = displaced {
            self.nodes[sibling].prev = Some(loser);
        }
        winner
    }

    /// Cuts a non-root node out of its tree, leaving it an isolated root
    /// with both outgoing links cleared. Its subtree comes along intact.
    fn excise(&mut self, handle: NodeHandle) {
        let (prev, sibling) = {
            let node = &mut self.nodes[handle];
            (node.prev.take(), node.sibling.take())
        };

        if let Some(sibling) = sibling {
            self.nodes[sibling].prev = prev;
        }
        if let Some(prev) = prev {
            // `prev` is the parent exactly when this node is its leftmost
            // child; otherwise it is the left sibling.
            if self.nodes[prev].child == Some(handle) {
                self.nodes[prev].child = sibling;
            } else {
                self.nodes[prev].sibling = sibling;
            }
        }
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for PairingHeap<T, C> {
    /// Builds an independent heap holding clones of the same elements. The
    /// clone shares no node with the source and issues its own handles; its
    /// internal shape may differ.
    fn clone(&self) -> Self {
        let mut heap = PairingHeap::with_comparator(self.compare.clone());
        for node in self.nodes.values() {
            heap.push(node.elt.clone());
        }
        heap
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PairingHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = PairingHeap::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for PairingHeap<T, C> {
    fn push(&mut self, value: T) {
        PairingHeap::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        PairingHeap::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        PairingHeap::peek(self)
    }

    fn len(&self) -> usize {
        PairingHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        PairingHeap::is_empty(self)
    }

    fn update_priorities(&mut self) {
        PairingHeap::update_priorities(self);
    }
}

impl<T, C: Compare<T>> AddressableQueue<T> for PairingHeap<T, C> {
    type Handle = NodeHandle;

    fn push_with_handle(&mut self, value: T) -> NodeHandle {
        PairingHeap::push_with_handle(self, value)
    }

    fn decrease_key(&mut self, handle: NodeHandle, value: T) -> Result<(), HeapError> {
        PairingHeap::decrease_key(self, handle, value)
    }
}
