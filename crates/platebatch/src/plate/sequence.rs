use core::{iter::FusedIterator, ops::Range};

use super::{Plate, TOTAL};

/// An iterator over a contiguous slice of the plate enumeration.
///
/// Each step computes its plate directly from the index, so iterators can be
/// created anywhere in the sequence at no cost and walked from either end.
///
/// # Example
///
/// ```
/// use platebatch::{Plate, Plates};
///
/// let codes: Vec<String> = Plates::between(999_998, 1_000_002)
///     .map(String::from)
///     .collect();
/// assert_eq!(codes, ["999998", "999999", "00000A", "00000B"]);
/// assert_eq!(Plate::iter().next_back(), Some(Plate::LAST));
/// ```
#[derive(Clone, Debug)]
pub struct Plates {
    range: Range<u64>,
}

impl Plates {
    /// Creates an iterator over indices `start..end`, clamped to the
    /// enumeration.
    pub fn between(start: u64, end: u64) -> Self {
        let end = end.min(TOTAL);
        Self {
            range: start.min(end)..end,
        }
    }

    /// Number of plates left to yield.
    pub fn remaining(&self) -> u64 {
        self.range.end - self.range.start
    }
}

impl Iterator for Plates {
    type Item = Plate;

    fn next(&mut self) -> Option<Plate> {
        self.range.next().and_then(|n| Plate::nth(n).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Plate> {
        self.range.nth(n).and_then(|n| Plate::nth(n).ok())
    }
}

impl DoubleEndedIterator for Plates {
    fn next_back(&mut self) -> Option<Plate> {
        self.range.next_back().and_then(|n| Plate::nth(n).ok())
    }
}

impl ExactSizeIterator for Plates {}

impl FusedIterator for Plates {}
