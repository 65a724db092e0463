// Behavioral and property tests for RingDeque

use callviz::collections::{Deque, DequeError, RingDeque};
use proptest::prelude::*;

#[test]
fn test_add_front_keeps_first_item_at_back() {
    let mut deque = RingDeque::new();
    for i in 0..20 {
        deque.add_front(i).unwrap();
        assert_eq!(deque.peek_front(), Ok(&i));
        assert_eq!(deque.peek_back(), Ok(&0));
    }
    assert_eq!(deque.len(), 20);
}

#[test]
fn test_cleared_deque_rejects_peeks_and_removes() {
    let mut deque = RingDeque::new();
    for i in 0..20 {
        deque.add_front(i).unwrap();
    }

    deque.clear();
    assert!(deque.is_empty());
    // clearing an empty deque is fine
    deque.clear();
    assert!(deque.is_empty());

    assert!(matches!(deque.peek_front(), Err(DequeError::Empty { .. })));
    assert!(matches!(deque.peek_back(), Err(DequeError::Empty { .. })));
    assert!(matches!(deque.remove_front(), Err(DequeError::Empty { .. })));
    assert!(matches!(deque.remove_back(), Err(DequeError::Empty { .. })));
}

#[test]
fn test_fresh_deque_rejects_peeks_and_removes() {
    let mut deque: RingDeque<String> = RingDeque::new();
    assert!(deque.peek_front().is_err());
    assert!(deque.peek_back().is_err());
    assert!(deque.remove_front().is_err());
    assert!(deque.remove_back().is_err());
    // errors leave the deque usable
    deque.add_back("x".to_string()).unwrap();
    assert_eq!(deque.remove_front().unwrap(), "x");
}

#[test]
fn test_add_back_then_drain_front() {
    let mut deque = RingDeque::new();
    for i in 0..20 {
        deque.add_back(i).unwrap();
        assert_eq!(deque.peek_back(), Ok(&i));
        assert_eq!(deque.peek_front(), Ok(&0));
    }

    for i in 0..20 {
        assert_eq!(deque.remove_front(), Ok(i));
        if i != 19 {
            assert_eq!(deque.peek_front(), Ok(&(i + 1)));
            assert_eq!(deque.peek_back(), Ok(&19));
        }
    }
    assert!(deque.is_empty());
}

#[test]
fn test_interleaved_ends() {
    let mut deque = RingDeque::new();

    // 0, -1, ..., -5 to the back
    for i in (-5..=0).rev() {
        deque.add_back(i).unwrap();
        assert_eq!(deque.peek_back(), Ok(&i));
        assert_eq!(deque.peek_front(), Ok(&0));
    }
    // 1, ..., 5 to the front
    for i in 1..6 {
        deque.add_front(i).unwrap();
        assert_eq!(deque.peek_back(), Ok(&-5));
        assert_eq!(deque.peek_front(), Ok(&i));
    }
    // -6 and -7 to the back
    for i in [-6, -7] {
        deque.add_back(i).unwrap();
        assert_eq!(deque.peek_back(), Ok(&i));
        assert_eq!(deque.peek_front(), Ok(&5));
    }

    let expected: Vec<i32> = (-7..=5).rev().collect();
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), expected);

    // Alternate removing from back and front
    let mut back_value = -7;
    let mut front_value = 5;
    while deque.len() >= 2 {
        assert_eq!(deque.remove_back(), Ok(back_value));
        back_value += 1;
        assert_eq!(deque.peek_back(), Ok(&back_value));

        assert_eq!(deque.remove_front(), Ok(front_value));
        front_value -= 1;
        assert_eq!(deque.peek_back(), Ok(&back_value));
        assert_eq!(deque.peek_front(), Ok(&front_value));
    }

    assert_eq!(deque.len(), 1);
    assert_eq!(deque.peek_front(), Ok(&-1));
    assert_eq!(deque.peek_back(), Ok(&-1));
}

#[test]
fn test_growth_then_drain_same_end() {
    let mut deque = RingDeque::with_capacity(4);
    let initial = deque.capacity();

    for i in 0..2 * initial {
        deque.add_front(i).unwrap();
    }
    assert!(deque.capacity() > initial);

    // LIFO from the front: last in, first out
    let drained: Vec<usize> = std::iter::from_fn(|| deque.remove_front().ok()).collect();
    let expected: Vec<usize> = (0..2 * initial).rev().collect();
    assert_eq!(drained, expected);
}

#[derive(Debug, Clone)]
enum Op {
    AddFront(i32),
    AddBack(i32),
    RemoveFront,
    RemoveBack,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::AddFront),
        any::<i32>().prop_map(Op::AddBack),
        Just(Op::RemoveFront),
        Just(Op::RemoveBack),
    ]
}

proptest! {
    /// The deque behaves like VecDeque and its index invariants hold after every operation.
    #[test]
    fn prop_matches_model_and_keeps_invariant(
        capacity in 2usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut deque = RingDeque::with_capacity(capacity);
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                Op::AddFront(v) => {
                    let was_full = deque.is_full();
                    let old_capacity = deque.capacity();
                    deque.add_front(v).unwrap();
                    model.push_front(v);
                    if was_full {
                        prop_assert_eq!(deque.capacity(), old_capacity * 2);
                    }
                }
                Op::AddBack(v) => {
                    deque.add_back(v).unwrap();
                    model.push_back(v);
                }
                Op::RemoveFront => {
                    prop_assert_eq!(deque.remove_front().ok(), model.pop_front());
                }
                Op::RemoveBack => {
                    prop_assert_eq!(deque.remove_back().ok(), model.pop_back());
                }
            }

            let capacity = deque.capacity();
            prop_assert_eq!(
                deque.is_empty(),
                deque.front_index() == (deque.back_index() + 1) % capacity
            );
            prop_assert_eq!(deque.is_empty(), model.is_empty());
            prop_assert!(deque.len() < capacity);
            prop_assert_eq!(deque.len(), model.len());
        }

        let contents: Vec<i32> = deque.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(contents, expected);
    }

    /// Filling through one end past several resizes loses and duplicates nothing.
    #[test]
    fn prop_growth_preserves_fifo_from_back(capacity in 2usize..6, extra in 0usize..40) {
        let mut deque = RingDeque::with_capacity(capacity);
        let count = 2 * capacity + extra;
        for i in 0..count {
            deque.add_back(i).unwrap();
        }
        let drained: Vec<usize> = std::iter::from_fn(|| deque.remove_back().ok()).collect();
        let expected: Vec<usize> = (0..count).rev().collect();
        prop_assert_eq!(drained, expected);
        prop_assert!(deque.is_empty());
    }
}
