//! Driving port for running the customer batch.
//!
//! Shells (the CLI, a scheduler, a request handler) call this port and never
//! touch the sources directly.

use async_trait::async_trait;

use crate::domain::{BatchError, BatchResult};

/// Domain use-case port for one batch run.
#[async_trait]
pub trait CustomerBatchQuery: Send + Sync {
    /// Fetch both collections and combine them.
    ///
    /// Returns [`BatchError::NothingRetrieved`] when both resulting collections
    /// are empty. Dropping the returned future cancels both in-flight fetches.
    async fn run(&self) -> Result<BatchResult, BatchError>;
}
