//! Outbound adapters for batch observability.
//!
//! [`TracingBatchEvents`] is the default sink: every source failure becomes a
//! structured `WARN` event. The Prometheus sink lives under
//! [`crate::outbound::metrics`] behind the `metrics` feature.

mod tracing_batch_events;

pub use tracing_batch_events::TracingBatchEvents;
