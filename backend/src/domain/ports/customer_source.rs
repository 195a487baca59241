//! Driven port for reading customers.
//!
//! The batch service depends only on [`CustomerSource`]; the Diesel adapter
//! implements it in production and tests substitute mocks or scripted doubles.
//! The two operations are independent: a failure in one says nothing about
//! the other.

use async_trait::async_trait;

use crate::domain::{Corporate, Individual};

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer source adapters.
    ///
    /// The batch service treats every variant as an opaque "fetch failed"
    /// signal; the variants exist for logs and adapter tests.
    pub enum CustomerSourceError {
        /// Connection to the backing store could not be established.
        Connection { message: String } =>
            "customer source connection failed: {message}",
        /// The read query failed (missing table, schema mismatch, ...).
        Query { message: String } =>
            "customer source query failed: {message}",
        /// The fetch did not finish before the run deadline.
        Timeout => "customer source fetch exceeded the run deadline",
    }
}

/// Port exposing the two independent customer reads.
///
/// Implementations return the complete collection in a stable order or an
/// error. An empty collection is a successful read, not a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerSource: Send + Sync {
    /// Fetch every individual customer.
    async fn fetch_individuals(&self) -> Result<Vec<Individual>, CustomerSourceError>;

    /// Fetch every corporate customer.
    async fn fetch_corporates(&self) -> Result<Vec<Corporate>, CustomerSourceError>;
}

/// Fixture source returning one canned record per collection.
///
/// Useful for wiring shells and services before a database is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCustomerSource;

#[async_trait]
impl CustomerSource for FixtureCustomerSource {
    async fn fetch_individuals(&self) -> Result<Vec<Individual>, CustomerSourceError> {
        Ok(vec![Individual::new(1, "個人A")])
    }

    async fn fetch_corporates(&self) -> Result<Vec<Corporate>, CustomerSourceError> {
        Ok(vec![Corporate::new(10, "法人X")])
    }
}
