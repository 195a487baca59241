//! Prometheus adapter counting per-source fetch failures.

use async_trait::async_trait;
use prometheus::{IntCounterVec, Opts, Registry};

use crate::domain::ports::{BatchEventSink, BatchEventSinkError, SourceFailureEvent};

/// Prometheus-backed batch event sink.
///
/// Exposes `customer_batch_source_failures_total{source}`.
pub struct PrometheusBatchEvents {
    source_failures_total: IntCounterVec,
}

impl PrometheusBatchEvents {
    /// Create and register the counter with the provided registry.
    ///
    /// # Errors
    ///
    /// Returns an error when Prometheus rejects metric registration.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let source_failures_total = IntCounterVec::new(
            Opts::new(
                "customer_batch_source_failures_total",
                "Customer source fetches that failed during a batch run",
            ),
            &["source"],
        )?;
        registry.register(Box::new(source_failures_total.clone()))?;
        Ok(Self {
            source_failures_total,
        })
    }
}

#[async_trait]
impl BatchEventSink for PrometheusBatchEvents {
    async fn record_source_failure(
        &self,
        event: &SourceFailureEvent,
    ) -> Result<(), BatchEventSinkError> {
        self.source_failures_total
            .get_metric_with_label_values(&[event.source.as_str()])
            .map_err(|err| BatchEventSinkError::export(err.to_string()))?
            .inc();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for source failure counters.

    use super::*;
    use crate::domain::CustomerKind;
    use crate::domain::ports::CustomerSourceError;
    use rstest::rstest;

    fn make_sink() -> (Registry, PrometheusBatchEvents) {
        let registry = Registry::new();
        let sink = PrometheusBatchEvents::new(&registry).expect("metric registration should succeed");
        (registry, sink)
    }

    #[test]
    fn registers_counter_with_registry() {
        let (registry, sink) = make_sink();
        sink.source_failures_total
            .with_label_values(&["individuals"])
            .inc();

        let families = registry.gather();
        assert!(
            families
                .iter()
                .any(|family| family.name() == "customer_batch_source_failures_total"),
            "source failure counter should be registered"
        );
    }

    #[rstest]
    #[case::individuals(CustomerKind::Individuals)]
    #[case::corporates(CustomerKind::Corporates)]
    #[tokio::test]
    async fn counts_failures_per_source(#[case] source: CustomerKind) {
        let (_registry, sink) = make_sink();
        let event = SourceFailureEvent::new(source, CustomerSourceError::timeout());

        sink.record_source_failure(&event)
            .await
            .expect("recording should not fail");
        sink.record_source_failure(&event)
            .await
            .expect("recording should not fail");

        let counter = sink
            .source_failures_total
            .with_label_values(&[source.as_str()]);
        assert_eq!(counter.get(), 2, "{source} failures should be counted");
    }
}
