//! Domain primitives, ports and the batch service.
//!
//! Purpose: hold the customer value objects and the aggregation policy that
//! combines the individuals and corporates fetches. Nothing here depends on a
//! storage technology; adapters live under [`crate::outbound`].
//!
//! Public surface:
//! - Individual, Corporate: immutable customer records.
//! - CustomerKind: label distinguishing the two sources.
//! - BatchResult: combined output of one run.
//! - BatchError: the aggregate failure.
//! - CustomerBatchService: the aggregation policy.

pub mod batch_result;
pub mod customer;
pub mod customer_batch_service;
pub mod error;
pub mod ports;

pub use self::batch_result::BatchResult;
pub use self::customer::{Corporate, CustomerKind, Individual};
pub use self::customer_batch_service::CustomerBatchService;
pub use self::error::BatchError;
