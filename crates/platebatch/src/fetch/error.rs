/// Boxed source error carried by [`FetchError`].
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// The failure stored in a result slot when retrieving one locator fails.
///
/// These are never returned from `fetch_bounded` itself; they sit in the
/// result vector at the failing locator's position while the rest of the batch
/// proceeds.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request could not be completed (connection refused, DNS failure,
    /// ...).
    #[error("request to {locator} failed: {source}")]
    Transport {
        locator: String,
        #[source]
        source: BoxError,
    },

    /// The request completed but reported a non-success status.
    #[error("request to {locator} returned status {status}")]
    Status { locator: String, status: u16 },

    /// The response body could not be decoded into the target type.
    #[error("failed to decode response from {locator}: {source}")]
    Decode {
        locator: String,
        #[source]
        source: BoxError,
    },

    /// No worker claimed this locator. Only reachable through a faulty
    /// `WorkQueue` implementation.
    #[error("{locator} was never claimed by a worker")]
    Unclaimed { locator: String },
}

impl FetchError {
    /// The locator whose retrieval failed.
    pub fn locator(&self) -> &str {
        match self {
            Self::Transport { locator, .. }
            | Self::Status { locator, .. }
            | Self::Decode { locator, .. }
            | Self::Unclaimed { locator } => locator,
        }
    }

    /// The status code, if the failure was a non-success response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
