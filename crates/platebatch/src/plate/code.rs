use core::{cmp::Ordering, fmt, str::FromStr};

use super::{BLOCKS, Block, DIGIT_RADIX, LETTER_RADIX, PLATE_LEN, ParseError, Plates, TOTAL};
use crate::{Error, Result, ToU64};

const DIGITS: &[u8; 10] = b"0123456789";
const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the `n`th code of the plate sequence as a 6-character string.
///
/// The sequence lists every code made of a run of decimal digits followed by
/// a run of uppercase letters, all-digits first:
///
/// `000000 → 999999 → 00000A → 99999Z → 0000AA → … → ZZZZZZ`
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `n` is negative, fractional or not finite.
/// - [`Error::OutOfRange`] if `n` is past the last code (`n > 501_363_135`).
///
/// # Example
///
/// ```
/// use platebatch::nth_code;
///
/// assert_eq!(nth_code(0).unwrap(), "000000");
/// assert_eq!(nth_code(1_000_000).unwrap(), "00000A");
/// assert_eq!(nth_code(501_363_135).unwrap(), "ZZZZZZ");
/// assert!(nth_code(-1).is_err());
/// ```
pub fn nth_code(n: impl ToU64) -> Result<String> {
    let n = n.to_u64().ok_or(Error::InvalidArgument {
        reason: "\"n\" must be a non-negative integer",
    })?;
    Plate::nth(n).map(String::from)
}

/// A single code of the plate sequence.
///
/// Stored as its 6 ASCII bytes, so it is `Copy` and formats without
/// allocating. Ordering follows the enumeration: all codes with fewer letters
/// sort first, then by digit value, then by letter value. This differs from
/// plain string ordering (`"00000A" > "999999"` here).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plate([u8; PLATE_LEN]);

impl Plate {
    /// The first code, `000000`.
    pub const FIRST: Self = Self(*b"000000");

    /// The last code, `ZZZZZZ`.
    pub const LAST: Self = Self(*b"ZZZZZZ");

    /// Computes the plate at enumeration index `n`.
    ///
    /// Runs in at most [`BLOCK_COUNT`](super::BLOCK_COUNT) block steps; the
    /// enumeration is never materialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `n > 501_363_135`.
    pub fn nth(n: u64) -> Result<Self> {
        let block = Block::containing(n).ok_or(Error::OutOfRange {
            index: n,
            total: TOTAL,
        })?;
        Ok(Self::encode(block, n - block.start))
    }

    fn encode(block: &Block, offset: u64) -> Self {
        let letter_space = block.letter_space();
        let mut digit_index = offset / letter_space;
        let mut letter_index = offset % letter_space;

        let mut buf = [b'0'; PLATE_LEN];
        let (digits, letters) = buf.split_at_mut(block.digits);
        // Fill least significant positions first.
        for slot in letters.iter_mut().rev() {
            *slot = LETTERS[(letter_index % LETTER_RADIX) as usize];
            letter_index /= LETTER_RADIX;
        }
        for slot in digits.iter_mut().rev() {
            *slot = DIGITS[(digit_index % DIGIT_RADIX) as usize];
            digit_index /= DIGIT_RADIX;
        }
        Self(buf)
    }

    /// Returns this plate's position in the enumeration.
    ///
    /// Inverse of [`Plate::nth`].
    pub fn index(&self) -> u64 {
        let block = &BLOCKS[self.letters()];
        let (digits, letters) = self.0.split_at(block.digits);
        let digit_index = digits
            .iter()
            .fold(0, |acc, &b| acc * DIGIT_RADIX + u64::from(b - b'0'));
        let letter_index = letters
            .iter()
            .fold(0, |acc, &b| acc * LETTER_RADIX + u64::from(b - b'A'));
        block.start + digit_index * block.letter_space() + letter_index
    }

    /// Number of leading digits.
    pub fn digits(&self) -> usize {
        PLATE_LEN - self.letters()
    }

    /// Number of trailing letters.
    pub fn letters(&self) -> usize {
        self.0.iter().filter(|b| b.is_ascii_uppercase()).count()
    }

    /// Returns the following plate, or `None` after [`Plate::LAST`].
    pub fn next_plate(&self) -> Option<Self> {
        Self::nth(self.index() + 1).ok()
    }

    /// Iterates over the whole enumeration in order.
    pub fn iter() -> Plates {
        Plates::between(0, TOTAL)
    }

    /// Iterates from `self` (inclusive) to the end of the enumeration.
    pub fn iter_from(self) -> Plates {
        Plates::between(self.index(), TOTAL)
    }

    /// Returns the raw ASCII bytes.
    pub const fn as_bytes(&self) -> &[u8; PLATE_LEN] {
        &self.0
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor only stores ASCII digits and uppercase
        // ASCII letters.
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// Parses a plate from raw bytes.
    ///
    /// Lowercase letters are accepted and normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not [`PLATE_LEN`] bytes long,
    /// contains anything other than ASCII digits and letters, or has a digit
    /// after a letter.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PLATE_LEN {
            return Err(ParseError::InvalidLen { len: bytes.len() }.into());
        }
        let mut buf = [0; PLATE_LEN];
        let mut in_letters = false;
        for (index, (slot, &byte)) in buf.iter_mut().zip(bytes).enumerate() {
            *slot = match byte {
                b'0'..=b'9' if in_letters => {
                    return Err(ParseError::DigitAfterLetter { index }.into());
                }
                b'0'..=b'9' => byte,
                b'A'..=b'Z' | b'a'..=b'z' => {
                    in_letters = true;
                    byte.to_ascii_uppercase()
                }
                _ => return Err(ParseError::InvalidByte { byte, index }.into()),
            };
        }
        Ok(Self(buf))
    }
}

impl Ord for Plate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Within one block, byte order matches enumeration order.
        self.letters()
            .cmp(&other.letters())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Plate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plate").field(&self.as_str()).finish()
    }
}

impl FromStr for Plate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl TryFrom<&str> for Plate {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.as_str().to_owned()
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
