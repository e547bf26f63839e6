//! Property tests: the tree must always agree with a stable sort of the
//! enqueued entries.

use bst_prqueue::{PrQueue, PrQueueError};
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<(i16, u32)>> {
    prop::collection::vec((-20i16..20, any::<u32>()), 0..200)
}

fn build(entries: &[(i16, u32)]) -> PrQueue<i16, u32> {
    let mut pq = PrQueue::new();
    for &(p, v) in entries {
        pq.enqueue(v, p);
    }
    pq
}

fn stable_sorted(entries: &[(i16, u32)]) -> Vec<(i16, u32)> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|(p, _)| *p);
    sorted
}

proptest! {
    #[test]
    fn drain_matches_stable_sort(entries in entries()) {
        let mut pq = build(&entries);
        prop_assert_eq!(pq.size(), entries.len());

        let mut drained = Vec::new();
        while let Some((p, v)) = pq.peek_entry().map(|(p, v)| (*p, *v)) {
            prop_assert_eq!(pq.dequeue(), Ok(v));
            drained.push((p, v));
        }
        prop_assert_eq!(drained, stable_sorted(&entries));
        prop_assert_eq!(pq.size(), 0);
        prop_assert_eq!(pq.dequeue(), Err(PrQueueError::EmptyQueue));
    }

    #[test]
    fn traversal_matches_drain_without_consuming(entries in entries()) {
        let mut pq = build(&entries);
        let expected = stable_sorted(&entries);

        let iterated: Vec<(i16, u32)> = pq.iter().map(|(p, v)| (*p, *v)).collect();
        prop_assert_eq!(&iterated, &expected);

        for _ in 0..2 {
            let mut walked = Vec::new();
            pq.begin();
            while let Some((p, v)) = pq.next() {
                walked.push((*p, *v));
            }
            prop_assert_eq!(&walked, &expected);
        }
        prop_assert_eq!(pq.size(), entries.len());

        let text: String = expected
            .iter()
            .map(|(p, v)| format!("{p} value: {v}\n"))
            .collect();
        prop_assert_eq!(pq.to_string(), text);

        let values: Vec<u32> = pq.into_iter().collect();
        let expected_values: Vec<u32> = expected.iter().map(|(_, v)| *v).collect();
        prop_assert_eq!(values, expected_values);
    }

    #[test]
    fn interleaved_operations_keep_order(
        ops in prop::collection::vec(prop::option::of((-10i16..10, any::<u32>())), 0..300)
    ) {
        // `Some` enqueues, `None` dequeues; checked against a sorted model.
        let mut pq = PrQueue::new();
        let mut model: Vec<(i16, u32)> = Vec::new();
        for op in ops {
            match op {
                Some((p, v)) => {
                    pq.enqueue(v, p);
                    let at = model.partition_point(|(q, _)| *q <= p);
                    model.insert(at, (p, v));
                }
                None => {
                    if model.is_empty() {
                        prop_assert_eq!(pq.dequeue(), Err(PrQueueError::EmptyQueue));
                    } else {
                        let (_, v) = model.remove(0);
                        prop_assert_eq!(pq.dequeue(), Ok(v));
                    }
                }
            }
            prop_assert_eq!(pq.size(), model.len());
            prop_assert_eq!(pq.peek().ok().copied(), model.first().map(|(_, v)| *v));
        }
        let rest: Vec<(i16, u32)> = pq.iter().map(|(p, v)| (*p, *v)).collect();
        prop_assert_eq!(rest, model);
    }

    #[test]
    fn clones_are_independent(entries in entries(), extra in any::<u32>()) {
        let original = build(&entries);
        let snapshot = original.clone();
        prop_assert!(original == snapshot);

        let mut copy = original.clone();
        copy.enqueue(extra, i16::MIN);
        prop_assert_eq!(copy.dequeue(), Ok(extra));
        while copy.dequeue().is_ok() {}

        prop_assert!(copy.is_empty());
        prop_assert_eq!(original.size(), entries.len());
        prop_assert!(original == snapshot);
    }

    #[test]
    fn rebuilding_in_the_same_order_is_equal(entries in entries()) {
        let a = build(&entries);
        let b = build(&entries);
        prop_assert!(a == b);
        prop_assert_eq!(a.height(), b.height());
    }
}
