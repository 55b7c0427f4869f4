use std::collections::VecDeque;

#[cfg(not(feature = "parking-lot"))]
use super::mutex::PoisonError;
use super::{
    WorkQueue,
    mutex::{Mutex, MutexGuard},
};

/// A [`WorkQueue`] that keeps the remaining indices in a mutex-guarded
/// [`VecDeque`].
///
/// Each claim pops the front index under the lock. Uses `parking_lot` when
/// the `parking-lot` feature is enabled, otherwise `std::sync::Mutex`.
///
/// ## Recommended When
/// - You want the literal "shared queue of remaining indices" model, e.g. to
///   inspect or reason about the pending set
///
/// ## See Also
/// - [`AtomicQueue`]
///
/// [`AtomicQueue`]: crate::AtomicQueue
#[derive(Debug)]
pub struct LockQueue {
    remaining: Mutex<VecDeque<usize>>,
}

impl LockQueue {
    #[cfg(feature = "parking-lot")]
    fn lock(&self) -> MutexGuard<'_, VecDeque<usize>> {
        self.remaining.lock()
    }

    // `pop_front` never leaves the deque half-updated; ignore poisoning.
    #[cfg(not(feature = "parking-lot"))]
    fn lock(&self) -> MutexGuard<'_, VecDeque<usize>> {
        self.remaining.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WorkQueue for LockQueue {
    fn with_len(len: usize) -> Self {
        Self {
            remaining: Mutex::new((0..len).collect()),
        }
    }

    fn claim(&self) -> Option<usize> {
        self.lock().pop_front()
    }

    fn remaining(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Barrier;
    use std::thread::scope;

    #[test]
    fn claims_in_ascending_order_then_drains() {
        let queue = LockQueue::with_len(2);
        assert_eq!(queue.claim(), Some(0));
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.claim(), Some(1));
        assert_eq!(queue.claim(), None);
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn concurrent_claims_are_unique_and_complete() {
        const LEN: usize = 20_000;
        let threads = num_cpus::get().max(2);
        let queue = LockQueue::with_len(LEN);
        let barrier = Barrier::new(threads);

        let claimed: Vec<Vec<usize>> = scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        let mut mine = Vec::new();
                        while let Some(i) = queue.claim() {
                            mine.push(i);
                        }
                        mine
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut seen = HashSet::with_capacity(LEN);
        for i in claimed.into_iter().flatten() {
            assert!(seen.insert(i), "index {i} claimed twice");
        }
        assert_eq!(seen.len(), LEN);
    }
}
