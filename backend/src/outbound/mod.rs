//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed customer repository using Diesel ORM
//! - **observability**: `tracing` sink for batch events
//! - **metrics**: Prometheus sink for batch events (feature-gated)
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

#[cfg(feature = "metrics")]
pub mod metrics;
pub mod observability;
pub mod persistence;
