//! Failures surfaced by the batch driving port.
//!
//! Per-source fetch failures never appear here: the batch service absorbs
//! them and reports them through
//! [`BatchEventSink`](crate::domain::ports::BatchEventSink). Callers only ever
//! see the aggregate outcome.

use thiserror::Error;

/// Error returned by [`CustomerBatchQuery::run`](crate::domain::ports::CustomerBatchQuery::run).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BatchError {
    /// Neither the individuals nor the corporates collection produced any
    /// records, whether because both fetches failed or because both sources
    /// were empty.
    #[error("batch aborted: no individuals or corporates could be retrieved")]
    NothingRetrieved,
}
