//! Customer batch domain service.
//!
//! Runs the individuals and corporates fetches side by side, isolates their
//! failures from each other, and decides the aggregate outcome. A failed
//! source is reported through [`BatchEventSink`] and contributes an empty
//! collection; it never aborts the other fetch.
//!
//! The aggregate verdict follows the emptiness rule: the run fails when both
//! resulting collections are empty and succeeds otherwise. The rule looks at
//! collection length, not at whether the fetches failed, so two successful
//! fetches that each return zero rows also fail the run. Callers relying on
//! "empty store" being a success must not use this service as-is.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info};

use crate::domain::ports::{
    BatchEventSink, CustomerBatchQuery, CustomerSource, CustomerSourceError, SourceFailureEvent,
};
use crate::domain::{BatchError, BatchResult, CustomerKind};

/// Batch service implementing [`CustomerBatchQuery`].
///
/// Stateless across runs; the same instance can be shared and invoked
/// repeatedly.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use customer_batch::domain::CustomerBatchService;
/// use customer_batch::domain::ports::{
///     CustomerBatchQuery, FixtureCustomerSource, NoOpBatchEventSink,
/// };
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let service = CustomerBatchService::new(
///     Arc::new(FixtureCustomerSource),
///     Arc::new(NoOpBatchEventSink),
/// );
/// let result = service.run().await.expect("fixture source has records");
/// assert_eq!(result.individuals().len(), 1);
/// assert_eq!(result.corporates().len(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct CustomerBatchService<S, E> {
    source: Arc<S>,
    events: Arc<E>,
    deadline: Option<Duration>,
}

impl<S, E> CustomerBatchService<S, E> {
    /// Create a service reading from `source` and reporting to `events`.
    pub const fn new(source: Arc<S>, events: Arc<E>) -> Self {
        Self {
            source,
            events,
            deadline: None,
        }
    }

    /// Bound each run by `deadline`, shared by both fetches.
    ///
    /// A fetch still pending when the deadline passes is dropped and counted
    /// as a failure of that source.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Same as [`Self::with_deadline`] but accepts an optional bound.
    #[must_use]
    pub const fn with_optional_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}

impl<S, E> CustomerBatchService<S, E>
where
    S: CustomerSource,
    E: BatchEventSink,
{
    async fn bounded<T, F>(deadline: Option<Instant>, fetch: F) -> Result<T, CustomerSourceError>
    where
        F: Future<Output = Result<T, CustomerSourceError>>,
    {
        match deadline {
            Some(at) => timeout_at(at, fetch)
                .await
                .unwrap_or_else(|_| Err(CustomerSourceError::timeout())),
            None => fetch.await,
        }
    }

    async fn absorb<T>(
        &self,
        source: CustomerKind,
        outcome: Result<Vec<T>, CustomerSourceError>,
    ) -> Vec<T> {
        let error = match outcome {
            Ok(records) => return records,
            Err(error) => error,
        };

        let event = SourceFailureEvent::new(source, error);
        // Sink failures must not change the batch outcome.
        if let Err(sink_error) = self.events.record_source_failure(&event).await {
            debug!(%source, error = %sink_error, "batch event sink rejected source failure");
        }
        Vec::new()
    }
}

#[async_trait]
impl<S, E> CustomerBatchQuery for CustomerBatchService<S, E>
where
    S: CustomerSource,
    E: BatchEventSink,
{
    async fn run(&self) -> Result<BatchResult, BatchError> {
        let deadline = self.deadline.map(|bound| Instant::now() + bound);

        let (individuals, corporates) = tokio::join!(
            Self::bounded(deadline, self.source.fetch_individuals()),
            Self::bounded(deadline, self.source.fetch_corporates()),
        );

        let individuals = self.absorb(CustomerKind::Individuals, individuals).await;
        let corporates = self.absorb(CustomerKind::Corporates, corporates).await;

        // Emptiness rule: judged on the collections, not on fetch errors.
        if individuals.is_empty() && corporates.is_empty() {
            return Err(BatchError::NothingRetrieved);
        }

        info!(
            individuals = individuals.len(),
            corporates = corporates.len(),
            "customer batch assembled"
        );
        Ok(BatchResult::new(individuals, corporates))
    }
}

#[cfg(test)]
#[path = "customer_batch_service_tests.rs"]
mod tests;
