use core::future::Future;

use serde::de::DeserializeOwned;

use super::BoxError;

/// A capability that retrieves the resource named by a locator.
///
/// This abstracts over the transport (an HTTP client, an in-memory fixture,
/// ...) so the batch logic in [`BoundedFetch`] stays transport-agnostic.
/// A returned error means the request itself failed; a response with a
/// non-success status is still `Ok` and is judged by [`Response::is_success`].
///
/// We require the returned future to be `Send` so batches can be driven from
/// inside a task on a multi-threaded runtime.
///
/// [`BoundedFetch`]: crate::BoundedFetch
pub trait Retrieve: Sync {
    type Response: Response;
    type Err: Into<BoxError>;

    fn retrieve(&self, locator: &str)
    -> impl Future<Output = Result<Self::Response, Self::Err>> + Send;
}

/// A retrieved, not yet decoded, response.
pub trait Response: Send {
    type Err: Into<BoxError>;

    /// Protocol-level success signal (e.g. an HTTP 2xx status).
    fn is_success(&self) -> bool;

    /// Status code reported alongside a non-success signal.
    fn status_code(&self) -> u16;

    /// Consumes the response and decodes its body into `T`.
    fn decode<T>(self) -> impl Future<Output = Result<T, Self::Err>> + Send
    where
        T: DeserializeOwned + Send;
}
