//! Domain port for batch observability events.
//!
//! Source failures are absorbed by the batch service, so this sink is the only
//! place where the per-source breakdown stays visible. Adapters decide whether
//! that means a log line, a counter, or both.

use async_trait::async_trait;

use crate::domain::CustomerKind;

use super::{CustomerSourceError, define_port_error};

define_port_error! {
    /// Errors exposed when recording batch events.
    pub enum BatchEventSinkError {
        /// The sink backend rejected the write.
        Export { message: String } => "batch event sink failed: {message}",
    }
}

/// Warning-level event emitted when one source fails during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailureEvent {
    /// Which collection could not be fetched.
    pub source: CustomerKind,
    /// Error returned by the source adapter.
    pub error: CustomerSourceError,
}

impl SourceFailureEvent {
    /// Build an event for the given source.
    pub const fn new(source: CustomerKind, error: CustomerSourceError) -> Self {
        Self { source, error }
    }
}

/// Recording port for batch observability events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BatchEventSink: Send + Sync {
    /// Record that one source failed and was replaced by an empty collection.
    async fn record_source_failure(
        &self,
        event: &SourceFailureEvent,
    ) -> Result<(), BatchEventSinkError>;
}

/// No-op implementation used when events are not collected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBatchEventSink;

#[async_trait]
impl BatchEventSink for NoOpBatchEventSink {
    async fn record_source_failure(
        &self,
        _event: &SourceFailureEvent,
    ) -> Result<(), BatchEventSinkError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_op_sink_accepts_events() {
        let event = SourceFailureEvent::new(
            CustomerKind::Corporates,
            CustomerSourceError::connection("refused"),
        );

        let result = NoOpBatchEventSink.record_source_failure(&event).await;
        assert!(result.is_ok());
    }
}
