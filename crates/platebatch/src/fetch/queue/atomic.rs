use portable_atomic::{AtomicUsize, Ordering};

use super::WorkQueue;

/// A lock-free [`WorkQueue`] backed by a single atomic cursor.
///
/// Because the work is always the full range `0..len`, the "queue" reduces to
/// the next unclaimed index. A claim is one compare-exchange that only
/// advances the cursor while it is below `len`, so indices are handed out in
/// ascending order, exactly once.
///
/// ## Recommended When
/// - Workers are many and items are cheap relative to contention
///
/// ## See Also
/// - [`LockQueue`]
///
/// [`LockQueue`]: crate::LockQueue
#[derive(Debug)]
pub struct AtomicQueue {
    #[cfg(feature = "cache-padded")]
    next: crossbeam_utils::CachePadded<AtomicUsize>,
    #[cfg(not(feature = "cache-padded"))]
    next: AtomicUsize,
    len: usize,
}

impl WorkQueue for AtomicQueue {
    fn with_len(len: usize) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            next: crossbeam_utils::CachePadded::new(AtomicUsize::new(0)),
            #[cfg(not(feature = "cache-padded"))]
            next: AtomicUsize::new(0),
            len,
        }
    }

    fn claim(&self) -> Option<usize> {
        self.next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |next| {
                (next < self.len).then_some(next + 1)
            })
            .ok()
    }

    fn remaining(&self) -> usize {
        self.len - self.next.load(Ordering::Acquire).min(self.len)
    }
}
