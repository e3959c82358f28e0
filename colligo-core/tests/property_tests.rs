//! Property tests for container ordering and transform laws

use colligo_core::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn stack_pops_in_reverse_push_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut stack = Stack::new();
        for &item in &items {
            stack.push(item);
        }

        let mut popped = Vec::with_capacity(items.len());
        for _ in 0..items.len() {
            popped.push(stack.pop().unwrap());
        }

        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(stack.pop(), Err(CoreError::EmptyContainer));
    }

    #[test]
    fn queue_dequeues_in_enqueue_order(items in prop::collection::vec(any::<String>(), 0..32)) {
        let mut queue = Queue::new();
        for item in &items {
            queue.enqueue(item.clone());
        }

        let mut dequeued = Vec::with_capacity(items.len());
        for _ in 0..items.len() {
            dequeued.push(queue.dequeue().unwrap());
        }

        prop_assert_eq!(dequeued, items);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn len_tracks_live_elements(pushes in 0usize..50, pops in 0usize..60) {
        let mut stack: Stack<usize> = (0..pushes).collect();
        let mut failures = 0;
        for _ in 0..pops {
            if stack.pop().is_err() {
                failures += 1;
            }
        }
        prop_assert_eq!(stack.len(), pushes.saturating_sub(pops));
        prop_assert_eq!(failures, pops.saturating_sub(pushes));
    }

    #[test]
    fn map_preserves_length(xs in prop::collection::vec(any::<i64>(), 0..100)) {
        let mapped = map(&xs, |x| x.wrapping_mul(3));
        prop_assert_eq!(mapped.len(), xs.len());
    }

    #[test]
    fn map_identity_is_noop(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        prop_assert_eq!(map(&xs, |x| *x), xs);
    }

    #[test]
    fn filter_partitions_input(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        let is_even = |x: &i32| x % 2 == 0;
        let kept = filter(&xs, is_even);
        let rejected = filter(&xs, |x| !is_even(x));

        prop_assert!(kept.iter().all(is_even));
        prop_assert!(rejected.iter().all(|x| !is_even(x)));
        prop_assert_eq!(kept.len() + rejected.len(), xs.len());

        // Removing the kept subsequence leaves exactly the rejected elements
        let mut remaining = Vec::new();
        let mut kept_iter = kept.iter().peekable();
        for x in &xs {
            if kept_iter.peek() == Some(&x) && is_even(x) {
                kept_iter.next();
            } else {
                remaining.push(*x);
            }
        }
        prop_assert_eq!(remaining, rejected);
    }

    #[test]
    fn reduce_add_equals_sum(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        prop_assert_eq!(reduce(&xs, 0i32, |acc, x| acc.wrapping_add(*x)), sum(&xs));
    }

    #[test]
    fn max_is_an_upper_bound(xs in prop::collection::vec(any::<i16>(), 1..100)) {
        let best = max(&xs).unwrap();
        prop_assert!(xs.iter().all(|&x| x <= best));
        prop_assert!(contains(&xs, &best));
    }
}
