//! Basic tests for colligo-core

use colligo_core::*;

#[test]
fn test_stack_reverses_push_order() {
    let mut stack = Stack::new();
    for word in ["a", "b", "c"] {
        stack.push(word);
    }

    let mut popped = Vec::new();
    while let Ok(word) = stack.pop() {
        popped.push(word);
    }
    assert_eq!(popped, vec!["c", "b", "a"]);
}

#[test]
fn test_queue_preserves_enqueue_order() {
    let mut queue = Queue::new();
    for n in 1..=5 {
        queue.enqueue(n);
    }

    let dequeued: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(dequeued, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_empty_containers_fail_without_mutation() {
    let mut stack: Stack<i32> = Stack::new();
    let mut queue: Queue<i32> = Queue::new();

    assert_eq!(stack.pop(), Err(CoreError::EmptyContainer));
    assert_eq!(stack.peek(), Err(CoreError::EmptyContainer));
    assert_eq!(queue.dequeue(), Err(CoreError::EmptyContainer));
    assert_eq!(queue.front(), Err(CoreError::EmptyContainer));

    assert_eq!(stack.len(), 0);
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_containers_hold_strings_and_structs() {
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        id: u32,
        name: String,
    }

    let mut queue = Queue::new();
    queue.enqueue(Job {
        id: 1,
        name: "build".to_string(),
    });
    queue.enqueue(Job {
        id: 2,
        name: "test".to_string(),
    });

    assert_eq!(queue.front().map(|job| job.id), Ok(1));
    let first = queue.dequeue().unwrap();
    assert_eq!(first.name, "build");
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_aggregate_scenarios() {
    assert_eq!(sum::<i32>(&[]), 0);
    assert_eq!(max::<i32>(&[]), Err(CoreError::EmptySequence));
    assert_eq!(max(&[5, 3, 9, 9, 1]), Ok(9));
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[1, 2, 3], &9));
}

#[test]
fn test_sum_and_max_float() {
    let readings = [2.5f64, 7.25, -1.0];
    assert_eq!(sum(&readings), 8.75);
    assert_eq!(max(&readings), Ok(7.25));
}

#[test]
fn test_reduce_with_add_matches_sum() {
    let numbers = [4i64, -2, 17, 0, 3];
    assert_eq!(reduce(&numbers, 0, |acc, n| acc + n), sum(&numbers));
}

#[test]
fn test_pair_swap_and_display() {
    let pair = Pair::new("x", 1.5);
    assert_eq!(pair.to_string(), "(x, 1.5)");
    assert_eq!(pair.swap().to_string(), "(1.5, x)");
}

#[test]
fn test_error_display() {
    assert_eq!(CoreError::EmptyContainer.to_string(), "container is empty");
    let boxed: Box<dyn std::error::Error> = Box::new(CoreError::EmptySequence);
    assert_eq!(boxed.to_string(), "sequence is empty");
}
