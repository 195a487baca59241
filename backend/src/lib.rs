//! Customer batch library.
//!
//! Loads individual and corporate customers from two independent sources
//! concurrently and combines them into a single [`domain::BatchResult`].
//! A failing source degrades to an empty collection; the run only fails
//! when both collections end up empty.
//!
//! - [`domain`]: records, ports and the batch service
//! - [`outbound`]: PostgreSQL, tracing and Prometheus adapters
//! - [`config`]: settings for the `customer-batch` binary

pub mod config;
pub mod domain;
pub mod outbound;
