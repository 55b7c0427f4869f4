/// Errors produced while parsing a plate code from text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input was not exactly `PLATE_LEN` bytes long.
    #[error("invalid length: {len}")]
    InvalidLen { len: usize },

    /// The input contained a byte that is neither an ASCII digit nor an ASCII
    /// letter.
    #[error("invalid byte {byte:#04x} at index {index}")]
    InvalidByte { byte: u8, index: usize },

    /// A digit appeared after the first letter.
    #[error("digit after letter at index {index}")]
    DigitAfterLetter { index: usize },
}
