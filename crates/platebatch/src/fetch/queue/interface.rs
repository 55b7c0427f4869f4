/// A shared source of not-yet-claimed item indices.
///
/// A batch of `len` items creates one queue holding `0..len`; every worker
/// repeatedly calls [`WorkQueue::claim`] until it returns `None`.
///
/// Implementations must hand out each index exactly once across all callers,
/// and must never skip one. Indices should come out lowest first, though
/// nothing relies on it.
pub trait WorkQueue: Sync {
    /// Creates a queue holding the indices `0..len`.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Atomically removes and returns the next index, or `None` once drained.
    fn claim(&self) -> Option<usize>;

    /// Number of indices not yet claimed.
    fn remaining(&self) -> usize;
}
