//! Addressable pairing-heap priority queue
//!
//! This crate provides a priority queue backed by a pairing heap with
//! efficient `decrease_key` support, as described in computer science
//! literature.
//!
//! # Features
//!
//! - **O(1) amortized insert**; insertion returns a stable handle
//! - **O(log n) amortized pop** via multi-pass pairing
//! - **o(log n) amortized decrease_key** through O(1) node excision
//! - **O(n) bulk rebuild** (`update_priorities`) for priorities mutated
//!   out-of-band, preserving element identities and handles
//! - Ordering supplied by any [`compare::Compare`] comparator; the natural
//!   ordering gives a min-first queue
//! - Nodes live in a generational arena, so stale handles are detected
//!   instead of dangling
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::PairingHeap;
//!
//! let mut heap = PairingHeap::new();
//! let handle = heap.push_with_handle(8);
//! heap.extend([5, 1, 3]);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! heap.decrease_key(handle, -1).unwrap();
//! assert_eq!(heap.pop(), Some(-1));
//! assert_eq!(heap.pop(), Some(1));
//! ```

pub mod pairing;
pub mod traits;

pub use pairing::{NodeHandle, PairingHeap};
pub use traits::{AddressableQueue, Handle, HeapError, PriorityQueue};
