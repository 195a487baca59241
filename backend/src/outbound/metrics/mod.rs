//! Outbound adapters for metrics exporting.
//!
//! Prometheus-backed implementations of domain observability ports. All
//! adapters here are feature-gated behind the `metrics` feature.

mod prometheus_batch_events;

pub use prometheus_batch_events::PrometheusBatchEvents;
