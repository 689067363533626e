use fib_sssp::{Error, FibonacciHeap};
use proptest::prelude::*;

#[test]
fn test_empty_heap() {
    let mut heap: FibonacciHeap<usize, i64> = FibonacciHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.find_min(), Err(Error::EmptyHeap));
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
}

#[test]
fn test_extract_min_multiple_elements() {
    let mut heap = FibonacciHeap::new();
    heap.insert(0usize, 10.0);
    heap.insert(1, 5.0);
    heap.insert(2, 15.0);

    assert_eq!(heap.find_min().unwrap(), (1, 5.0));
    assert_eq!(heap.extract_min().unwrap(), (1, 5.0));
    assert_eq!(heap.extract_min().unwrap(), (0, 10.0));
    assert_eq!(heap.extract_min().unwrap(), (2, 15.0));
    assert!(heap.is_empty());
}

#[test]
fn test_decrease_key_moves_node_to_front() {
    let mut heap = FibonacciHeap::new();
    heap.insert(0usize, 10.0);
    heap.insert(1, 20.0);
    let h = heap.insert(2, 30.0);

    heap.decrease_key(h, 5.0).unwrap();
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.key(h).unwrap(), 5.0);
    assert_eq!(heap.extract_min().unwrap(), (2, 5.0));
}

#[test]
fn test_decrease_key_rejects_non_smaller_key() {
    let mut heap = FibonacciHeap::new();
    let h = heap.insert(0usize, 10.0);

    assert_eq!(heap.decrease_key(h, 20.0), Err(Error::InvalidKey));
    assert_eq!(heap.decrease_key(h, 10.0), Err(Error::InvalidKey));
    assert_eq!(heap.key(h).unwrap(), 10.0);
    assert_eq!(heap.extract_min().unwrap(), (0, 10.0));
}

#[test]
fn test_extracted_handle_is_rejected() {
    let mut heap = FibonacciHeap::new();
    let h = heap.insert(0usize, 1);
    heap.insert(1, 2);
    heap.extract_min().unwrap();

    assert!(!heap.contains(h));
    assert_eq!(heap.decrease_key(h, 0), Err(Error::InvalidHandle(h.index())));
}

#[test]
fn test_decrease_key_after_consolidation() {
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..64usize).map(|v| heap.insert(v, v as i64 + 100)).collect();

    // Force a consolidation so later decreases hit nodes deep inside trees.
    assert_eq!(heap.extract_min().unwrap(), (0, 100));
    for (i, &h) in handles.iter().enumerate().skip(1).step_by(3) {
        heap.decrease_key(h, i as i64).unwrap();
    }

    let mut last = i64::MIN;
    let mut count = 0;
    while let Ok((_, key)) = heap.extract_min() {
        assert!(key >= last);
        last = key;
        count += 1;
    }
    assert_eq!(count, 63);
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    ExtractMin,
    DecreaseKey(usize, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-1000..1000i32).prop_map(Op::Insert),
        2 => Just(Op::ExtractMin),
        2 => (any::<usize>(), 1..500i32).prop_map(|(i, d)| Op::DecreaseKey(i, d)),
    ]
}

proptest! {
    #[test]
    fn prop_drain_is_sorted_permutation(keys in prop::collection::vec(-10_000..10_000i64, 0..200)) {
        let mut heap = FibonacciHeap::new();
        for (v, &k) in keys.iter().enumerate() {
            heap.insert(v, k);
        }

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract_min().unwrap().1);
        }

        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
        prop_assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
    }

    #[test]
    fn prop_find_min_tracks_model(ops in prop::collection::vec(op_strategy(), 1..300)) {
        let mut heap = FibonacciHeap::new();
        // Model: (handle, current key) of every live node.
        let mut live: Vec<(fib_sssp::NodeHandle, i32)> = Vec::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Insert(k) => live.push((heap.insert(step, k), k)),
                Op::ExtractMin => {
                    if let Ok((_, k)) = heap.extract_min() {
                        let pos = live.iter().position(|&(h, key)| key == k && !heap.contains(h)).unwrap();
                        live.swap_remove(pos);
                    } else {
                        prop_assert!(live.is_empty());
                    }
                }
                Op::DecreaseKey(i, delta) => {
                    if !live.is_empty() {
                        let idx = i % live.len();
                        let (h, k) = live[idx];
                        let before = heap.len();
                        heap.decrease_key(h, k - delta).unwrap();
                        prop_assert_eq!(heap.len(), before);
                        prop_assert_eq!(heap.key(h).unwrap(), k - delta);
                        prop_assert_eq!(heap.decrease_key(h, k), Err(Error::InvalidKey));
                        live[idx].1 = k - delta;
                    }
                }
            }

            prop_assert_eq!(heap.len(), live.len());
            match live.iter().map(|&(_, k)| k).min() {
                Some(min) => prop_assert_eq!(heap.find_min().unwrap().1, min),
                None => prop_assert!(heap.is_empty()),
            }
        }
    }
}
