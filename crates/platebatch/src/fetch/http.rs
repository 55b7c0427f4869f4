use core::future::Future;

use serde::de::DeserializeOwned;

use super::{Response, Retrieve};

/// Issues a `GET` per locator.
///
/// Timeouts, TLS, default headers and connection pooling are whatever the
/// client was built with; the batch adds no policy of its own.
impl Retrieve for reqwest::Client {
    type Response = reqwest::Response;
    type Err = reqwest::Error;

    fn retrieve(
        &self,
        locator: &str,
    ) -> impl Future<Output = Result<Self::Response, Self::Err>> + Send {
        self.get(locator).send()
    }
}

/// Success is any 2xx status; bodies are decoded as JSON.
impl Response for reqwest::Response {
    type Err = reqwest::Error;

    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }

    fn decode<T>(self) -> impl Future<Output = Result<T, Self::Err>> + Send
    where
        T: DeserializeOwned + Send,
    {
        self.json::<T>()
    }
}
