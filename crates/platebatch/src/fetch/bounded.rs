use core::future::Future;

use futures::future::join_all;
use serde::de::DeserializeOwned;
#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{AtomicQueue, FetchError, Response, Retrieve, WorkQueue};
use crate::{Error, Result, ToU64};

/// The outcome stored in one result slot.
pub type FetchResult<T> = core::result::Result<T, FetchError>;

/// Retrieves every locator with at most `limit` retrievals in flight.
///
/// Arguments are validated up front: an invalid `limit` is reported here,
/// before any future exists and before any retrieval is issued. The returned
/// future resolves to one [`FetchResult`] per locator, in the same order as
/// `locators`, regardless of which item finished first. A failed item never
/// affects its siblings.
///
/// This is shorthand for [`BoundedFetch::new`] followed by
/// [`BoundedFetch::run`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `limit` is zero, negative or not a
/// whole number. Limits above the number of locators, however large, are
/// clamped.
///
/// # Example
///
/// ```
/// # async fn example(client: &impl platebatch::Retrieve) -> platebatch::Result<()> {
/// use platebatch::fetch_bounded;
///
/// let urls = ["https://example.com/a.json", "https://example.com/b.json"];
/// let results = fetch_bounded::<_, _, serde_json::Value>(client, &urls, 2)?.await;
/// assert_eq!(results.len(), urls.len());
/// # Ok(())
/// # }
/// ```
pub fn fetch_bounded<'a, R, S, T>(
    retriever: &'a R,
    locators: &'a [S],
    limit: impl ToU64,
) -> Result<impl Future<Output = Vec<FetchResult<T>>>>
where
    R: Retrieve,
    S: AsRef<str> + Sync,
    T: DeserializeOwned + Send,
{
    Ok(BoundedFetch::new(retriever, locators, limit)?.run())
}

/// A validated batch retrieval, ready to run.
///
/// Splitting construction from execution keeps argument errors synchronous:
/// [`BoundedFetch::new`] either rejects the call or returns a batch that can
/// only succeed (per-item failures live in the results).
///
/// The batch spawns `min(limit, locators.len())` workers that all pull from a
/// single shared [`WorkQueue`]. A worker that finishes a fast item immediately
/// claims the next one, so a slow item never leaves capacity idle while work
/// remains. Workers are polled together inside the returned future; no task
/// is spawned, so any executor can drive it.
pub struct BoundedFetch<'a, R, S> {
    retriever: &'a R,
    locators: &'a [S],
    workers: usize,
}

impl<'a, R, S> BoundedFetch<'a, R, S>
where
    R: Retrieve,
    S: AsRef<str> + Sync,
{
    /// Validates the arguments and prepares a batch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `limit` is zero, negative or not
    /// a whole number.
    pub fn new(retriever: &'a R, locators: &'a [S], limit: impl ToU64) -> Result<Self> {
        let limit = limit
            .to_u64()
            .filter(|&limit| limit > 0)
            .ok_or(Error::InvalidArgument {
                reason: "\"limit\" must be a positive integer",
            })?;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(Self {
            retriever,
            locators,
            workers: limit.min(locators.len()),
        })
    }

    /// Number of workers the batch will run.
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Number of locators in the batch.
    pub const fn len(&self) -> usize {
        self.locators.len()
    }

    /// Returns `true` if there are no locators to retrieve.
    pub const fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    /// Runs the batch using an [`AtomicQueue`].
    pub async fn run<T>(self) -> Vec<FetchResult<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.run_with::<T, AtomicQueue>().await
    }

    /// Runs the batch using the given [`WorkQueue`] implementation.
    ///
    /// Completes once every worker has drained the queue, i.e. once every
    /// locator has been attempted exactly once.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self),
            fields(items = self.locators.len(), workers = self.workers)
        )
    )]
    pub async fn run_with<T, Q>(self) -> Vec<FetchResult<T>>
    where
        T: DeserializeOwned + Send,
        Q: WorkQueue,
    {
        if self.locators.is_empty() {
            return Vec::new();
        }

        let queue = Q::with_len(self.locators.len());
        let workers = (0..self.workers).map(|worker_id| self.worker(worker_id, &queue));

        // Each worker returns the slots it owns; scatter them back in place.
        let mut slots: Vec<Option<FetchResult<T>>> =
            (0..self.locators.len()).map(|_| None).collect();
        for (index, outcome) in join_all(workers).await.into_iter().flatten() {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(outcome);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Batch complete");

        slots
            .into_iter()
            .zip(self.locators)
            .map(|(slot, locator)| {
                slot.unwrap_or_else(|| {
                    Err(FetchError::Unclaimed {
                        locator: locator.as_ref().to_owned(),
                    })
                })
            })
            .collect()
    }

    async fn worker<T, Q>(&self, _worker_id: usize, queue: &Q) -> Vec<(usize, FetchResult<T>)>
    where
        T: DeserializeOwned + Send,
        Q: WorkQueue,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!("Worker {_worker_id} started");

        let mut done = Vec::new();
        while let Some(index) = queue.claim() {
            let Some(locator) = self.locators.get(index) else {
                continue;
            };

            #[cfg(feature = "tracing")]
            tracing::trace!("Worker {_worker_id} claimed item {index}");

            let outcome = fetch_one(self.retriever, locator.as_ref()).await;

            #[cfg(feature = "tracing")]
            {
                if let Err(e) = &outcome {
                    tracing::debug!("Worker {_worker_id} failed item {index}: {e}");
                }
            }

            done.push((index, outcome));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("Worker {_worker_id} stopped after {} items", done.len());

        done
    }
}

/// Retrieves and decodes a single locator, converting every failure into a
/// [`FetchError`].
async fn fetch_one<R, T>(retriever: &R, locator: &str) -> FetchResult<T>
where
    R: Retrieve,
    T: DeserializeOwned + Send,
{
    let response = retriever
        .retrieve(locator)
        .await
        .map_err(|e| FetchError::Transport {
            locator: locator.to_owned(),
            source: e.into(),
        })?;

    if !response.is_success() {
        return Err(FetchError::Status {
            locator: locator.to_owned(),
            status: response.status_code(),
        });
    }

    response
        .decode::<T>()
        .await
        .map_err(|e| FetchError::Decode {
            locator: locator.to_owned(),
            source: e.into(),
        })
}
