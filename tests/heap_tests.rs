//! Scenario tests for the pairing heap
//!
//! These exercise the public surface end to end: pop ordering, decrease_key
//! in every node position, bulk rebuild after out-of-band mutation, clone
//! independence, and custom comparators.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use compare::Compare;
use pairing_pq::{HeapError, PairingHeap};

/// Orders i32 values largest-first, turning the heap into a max-first queue.
struct Descending;

impl Compare<i32> for Descending {
    fn compare(&self, a: &i32, b: &i32) -> Ordering {
        b.cmp(a)
    }
}

/// Orders shared cells by their current contents. The heap itself never sees
/// the mutation when a cell is written through another Rc clone.
struct ByCell;

impl Compare<Rc<Cell<i32>>> for ByCell {
    fn compare(&self, a: &Rc<Cell<i32>>, b: &Rc<Cell<i32>>) -> Ordering {
        a.get().cmp(&b.get())
    }
}

fn drain<T, C: Compare<T>>(heap: &mut PairingHeap<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    while let Some(value) = heap.pop() {
        out.push(value);
    }
    out
}

#[test]
fn empty_heap_behaves() {
    let mut heap: PairingHeap<String> = PairingHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}

#[test]
fn pop_yields_sorted_sequence() {
    let mut heap = PairingHeap::new();
    for v in [5, 1, 8, 3] {
        heap.push(v);
    }

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.len(), 4);
    assert_eq!(drain(&mut heap), vec![1, 3, 5, 8]);
    assert!(heap.is_empty());
}

#[test]
fn pushed_extreme_takes_over_top() {
    let mut heap = PairingHeap::new();
    for v in [5, 1, 8, 3] {
        heap.push(v);
    }
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(3));

    heap.push(0);
    assert_eq!(heap.peek(), Some(&0));
    assert_eq!(heap.pop(), Some(0));

    // The remaining elements resume in order.
    assert_eq!(drain(&mut heap), vec![5, 8]);
}

#[test]
fn extraction_order_ignores_insertion_order() {
    let permutations = [
        vec![2, 7, 2, -3, 9, 0],
        vec![9, 2, 0, 2, 7, -3],
        vec![-3, 0, 2, 2, 7, 9],
        vec![7, 9, -3, 2, 0, 2],
    ];
    for values in permutations {
        let mut heap: PairingHeap<i32> = values.into_iter().collect();
        assert_eq!(drain(&mut heap), vec![-3, 0, 2, 2, 7, 9]);
    }
}

#[test]
fn decrease_key_reorders_full_sequence() {
    let mut heap = PairingHeap::new();
    heap.push(5);
    heap.push(1);
    let handle8 = heap.push_with_handle(8);
    heap.push(3);

    heap.decrease_key(handle8, -1).unwrap();
    assert_eq!(heap.peek(), Some(&-1));
    assert_eq!(heap.get(handle8), Some(&-1));
    assert_eq!(drain(&mut heap), vec![-1, 1, 3, 5]);
}

#[test]
fn decrease_key_steps() {
    let mut heap = PairingHeap::new();
    let _h1 = heap.push_with_handle(100);
    let h2 = heap.push_with_handle(200);
    let _h3 = heap.push_with_handle(300);
    let h4 = heap.push_with_handle(400);

    assert_eq!(heap.peek(), Some(&100));

    // Decrease an element that is not the top.
    heap.decrease_key(h2, 50).unwrap();
    assert_eq!(heap.peek(), Some(&50));

    // Decrease another to become the new top.
    heap.decrease_key(h4, 25).unwrap();
    assert_eq!(heap.peek(), Some(&25));

    // Decrease the current top even further.
    heap.decrease_key(h4, 1).unwrap();
    assert_eq!(heap.peek(), Some(&1));

    assert_eq!(drain(&mut heap), vec![1, 50, 100, 300]);
}

#[test]
fn decrease_key_after_pops() {
    let mut heap = PairingHeap::new();
    let mut handles = Vec::new();
    for i in 0..30 {
        handles.push(heap.push_with_handle(i * 10));
    }
    for _ in 0..10 {
        heap.pop();
    }

    // Handles for popped elements are reported stale, survivors still work.
    for (i, handle) in handles.iter().enumerate() {
        if i < 10 {
            assert_eq!(heap.decrease_key(*handle, 0), Err(HeapError::InvalidHandle));
        } else {
            heap.decrease_key(*handle, i as i32).unwrap();
        }
    }
    assert_eq!(drain(&mut heap), (10..30).map(|i| i as i32).collect::<Vec<_>>());
}

#[test]
fn handles_survive_rebuild() {
    let mut heap = PairingHeap::new();
    let mut handles = Vec::new();
    for i in 0..20 {
        handles.push(heap.push_with_handle(100 + i));
    }
    heap.update_priorities();

    // Rebuild rewires every node, but identities are preserved.
    for (i, handle) in handles.iter().enumerate() {
        assert_eq!(heap.get(*handle), Some(&(100 + i as i32)));
    }
    heap.decrease_key(handles[7], 0).unwrap();
    assert_eq!(heap.pop(), Some(0));
}

#[test]
fn rebuild_restores_order_after_external_mutation() {
    let cells: Vec<Rc<Cell<i32>>> = [4, 1, 3, 2, 5]
        .iter()
        .map(|&v| Rc::new(Cell::new(v)))
        .collect();

    let mut heap = PairingHeap::with_comparator(ByCell);
    for cell in &cells {
        heap.push(Rc::clone(cell));
    }
    assert_eq!(heap.peek().map(|c| c.get()), Some(1));

    // Rewrite every priority behind the heap's back, then repair.
    cells[0].set(10); // 4 -> 10
    cells[1].set(70); // 1 -> 70
    cells[2].set(30); // 3 -> 30
    cells[3].set(50); // 2 -> 50
    cells[4].set(20); // 5 -> 20
    heap.update_priorities();

    let popped: Vec<i32> = drain(&mut heap).iter().map(|c| c.get()).collect();
    assert_eq!(popped, vec![10, 20, 30, 50, 70]);
}

#[test]
fn rebuild_is_idempotent_on_valid_heap() {
    let values = vec![9, -2, 4, 4, 0, 17, -2];
    let mut plain: PairingHeap<i32> = values.iter().copied().collect();
    let mut rebuilt: PairingHeap<i32> = values.into_iter().collect();

    rebuilt.update_priorities();
    rebuilt.update_priorities();

    assert_eq!(plain.len(), rebuilt.len());
    assert_eq!(drain(&mut plain), drain(&mut rebuilt));
}

#[test]
fn clone_is_independent() {
    let mut original: PairingHeap<i32> = [6, 2, 9].into_iter().collect();
    let mut copy = original.clone();

    copy.push(1);
    copy.pop();
    copy.pop();

    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 2);
    assert_eq!(drain(&mut original), vec![2, 6, 9]);
    assert_eq!(drain(&mut copy), vec![6, 9]);
}

#[test]
fn reversed_comparator_pops_largest_first() {
    let mut heap = PairingHeap::with_comparator(Descending);
    for v in [5, 1, 8, 3] {
        heap.push(v);
    }
    assert_eq!(heap.peek(), Some(&8));
    assert_eq!(drain(&mut heap), vec![8, 5, 3, 1]);
}

#[test]
fn merge_combines_and_consumes() {
    let mut left: PairingHeap<i32> = [4, 0, 6].into_iter().collect();
    let right: PairingHeap<i32> = [5, 1, 3].into_iter().collect();

    left.merge(right);
    assert_eq!(left.len(), 6);
    assert_eq!(drain(&mut left), vec![0, 1, 3, 4, 5, 6]);
}

#[test]
fn len_tracks_every_operation() {
    let mut heap = PairingHeap::new();
    assert_eq!(heap.len(), 0);
    for i in 0..50 {
        heap.push(i);
        assert_eq!(heap.len(), (i + 1) as usize);
    }
    heap.update_priorities();
    assert_eq!(heap.len(), 50);
    for i in (0..50).rev() {
        heap.pop();
        assert_eq!(heap.len(), i as usize);
    }
    heap.push(7);
    heap.clear();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
}

#[test]
fn duplicate_values_all_come_back() {
    let mut heap: PairingHeap<i32> = std::iter::repeat(3).take(10).collect();
    heap.push(3);
    assert_eq!(drain(&mut heap), vec![3; 11]);
}
