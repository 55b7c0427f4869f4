/// Width of every plate code, in characters.
pub const PLATE_LEN: usize = 6;

/// Number of digit/letter splits: 0 through [`PLATE_LEN`] trailing letters.
pub const BLOCK_COUNT: usize = PLATE_LEN + 1;

/// Size of the decimal digit alphabet.
pub const DIGIT_RADIX: u64 = 10;

/// Size of the letter alphabet (`A`-`Z`).
pub const LETTER_RADIX: u64 = 26;

/// A contiguous range of the plate enumeration sharing one digit/letter split.
///
/// Block `k` holds every code with `PLATE_LEN - k` leading digits followed by
/// `k` letters, and spans `10^digits * 26^letters` indices starting at
/// [`Block::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// Number of leading digit positions.
    pub digits: usize,
    /// Number of trailing letter positions.
    pub letters: usize,
    /// First enumeration index covered by this block.
    pub start: u64,
    /// Number of codes in this block.
    pub len: u64,
}

impl Block {
    const fn new(letters: usize, start: u64) -> Self {
        let digits = PLATE_LEN - letters;
        Self {
            digits,
            letters,
            start,
            len: DIGIT_RADIX.pow(digits as u32) * LETTER_RADIX.pow(letters as u32),
        }
    }

    /// One past the last enumeration index covered by this block.
    pub const fn end(&self) -> u64 {
        self.start + self.len
    }

    /// Number of distinct letter suffixes, i.e. `26^letters`.
    pub const fn letter_space(&self) -> u64 {
        LETTER_RADIX.pow(self.letters as u32)
    }

    /// Returns `true` if `n` falls inside this block.
    pub const fn contains(&self, n: u64) -> bool {
        n >= self.start && n < self.end()
    }

    /// Finds the block containing enumeration index `n`.
    ///
    /// Walks from the all-digits block toward the all-letters block, so the
    /// cost is bounded by [`BLOCK_COUNT`] regardless of the magnitude of `n`.
    /// Returns `None` if `n >= TOTAL`.
    pub fn containing(n: u64) -> Option<&'static Self> {
        BLOCKS.iter().find(|block| block.contains(n))
    }
}

/// Every block of the enumeration, ordered by letter count.
pub const BLOCKS: [Block; BLOCK_COUNT] = {
    let mut blocks = [Block {
        digits: 0,
        letters: 0,
        start: 0,
        len: 0,
    }; BLOCK_COUNT];
    let mut letters = 0;
    let mut start = 0;
    while letters < BLOCK_COUNT {
        blocks[letters] = Block::new(letters, start);
        start += blocks[letters].len;
        letters += 1;
    }
    blocks
};

/// Total number of plate codes.
pub const TOTAL: u64 = BLOCKS[BLOCK_COUNT - 1].end();

/// Largest valid enumeration index (`ZZZZZZ`).
pub const MAX_INDEX: u64 = TOTAL - 1;

const _: () = assert!(TOTAL == 501_363_136);
