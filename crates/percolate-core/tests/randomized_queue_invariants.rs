//! Property tests for `RandomizedQueue`:
//!
//! 1. Draining with `dequeue` yields a permutation of what was enqueued.
//! 2. `sample` never changes the size.
//! 3. Capacity always holds the items and stays within the quarter-load bound.
//! 4. Iteration yields a permutation and leaves the queue untouched.

use percolate::collections::RandomizedQueue;
use proptest::prelude::*;

fn assert_load_factor<T>(queue: &RandomizedQueue<T>) -> Result<(), TestCaseError> {
    prop_assert!(queue.capacity() >= queue.len());
    prop_assert!(
        queue.is_empty() || queue.len() * 4 >= queue.capacity(),
        "len {} too small for capacity {}",
        queue.len(),
        queue.capacity()
    );
    Ok(())
}

proptest! {
    #[test]
    fn dequeue_drains_a_permutation(n in 0usize..200, seed in any::<u64>()) {
        let mut queue = RandomizedQueue::seeded(seed);
        queue.extend(0..n);
        prop_assert_eq!(queue.len(), n);

        let mut drained = Vec::with_capacity(n);
        while let Ok(item) = queue.dequeue() {
            drained.push(item);
            assert_load_factor(&queue)?;
        }
        drained.sort_unstable();
        prop_assert_eq!(drained, (0..n).collect::<Vec<_>>());
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn sample_never_changes_size(n in 1usize..50, draws in 1usize..100, seed in any::<u64>()) {
        let mut queue = RandomizedQueue::seeded(seed);
        queue.extend(0..n);
        let capacity = queue.capacity();
        for _ in 0..draws {
            let item = *queue.sample().unwrap();
            prop_assert!(item < n);
        }
        prop_assert_eq!(queue.len(), n);
        prop_assert_eq!(queue.capacity(), capacity);
    }

    #[test]
    fn interleaved_operations_keep_storage_bounded(
        ops in prop::collection::vec(any::<bool>(), 0..300),
        seed in any::<u64>(),
    ) {
        let mut queue = RandomizedQueue::seeded(seed);
        let mut expected_len = 0usize;
        for (i, enqueue) in ops.into_iter().enumerate() {
            if enqueue {
                queue.enqueue(i as u16);
                expected_len += 1;
            } else if queue.dequeue().is_ok() {
                expected_len -= 1;
            }
            prop_assert_eq!(queue.len(), expected_len);
            assert_load_factor(&queue)?;
        }
    }

    #[test]
    fn iteration_is_a_permutation_snapshot(n in 0usize..100, seed in any::<u64>()) {
        let mut queue = RandomizedQueue::seeded(seed);
        queue.extend(0..n);
        let mut seen: Vec<usize> = queue.iter().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(queue.len(), n);
    }
}
