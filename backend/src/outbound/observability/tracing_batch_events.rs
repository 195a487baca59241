//! `tracing`-backed batch event sink.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{BatchEventSink, BatchEventSinkError, SourceFailureEvent};

/// Emits each source failure as a `WARN` event.
///
/// Fields: `source` (`individuals` or `corporates`) and `error` (adapter
/// message). Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBatchEvents;

#[async_trait]
impl BatchEventSink for TracingBatchEvents {
    async fn record_source_failure(
        &self,
        event: &SourceFailureEvent,
    ) -> Result<(), BatchEventSinkError> {
        warn!(
            source = %event.source,
            error = %event.error,
            "customer source fetch failed; continuing with an empty collection"
        );
        Ok(())
    }
}
