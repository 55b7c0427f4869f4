/// A result type defaulting to the crate-level [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised synchronously by `platebatch` entry points.
///
/// These are argument and domain errors: they abort the call before any work
/// starts. Failures of individual retrievals inside a batch are never surfaced
/// through this type; they are stored in the batch result instead (see
/// `FetchError`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A call-time argument was malformed (negative, fractional, zero where a
    /// positive value is required, ...).
    #[error("{reason}")]
    InvalidArgument {
        /// Human readable description of the violated precondition.
        reason: &'static str,
    },

    /// An index fell outside of the enumeration's valid domain.
    #[error("\"n\" is out of range (0 to {})", Grouped(*total))]
    OutOfRange {
        /// The rejected index, saturated to `u64::MAX`.
        index: u64,
        /// Size of the domain; valid indices are `0..total`.
        total: u64,
    },

    /// A plate code could not be parsed.
    #[cfg_attr(docsrs, doc(cfg(feature = "plate")))]
    #[cfg(feature = "plate")]
    #[error("invalid plate: {0}")]
    Parse(#[from] crate::ParseError),
}

/// Formats an integer with `,` thousands separators.
struct Grouped(u64);

impl core::fmt::Display for Grouped {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
