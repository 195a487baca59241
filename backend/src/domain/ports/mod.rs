//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod batch_events;
mod customer_batch_query;
mod customer_provisioning;
mod customer_source;

#[cfg(test)]
pub use batch_events::MockBatchEventSink;
pub use batch_events::{
    BatchEventSink, BatchEventSinkError, NoOpBatchEventSink, SourceFailureEvent,
};
pub use customer_batch_query::CustomerBatchQuery;
#[cfg(test)]
pub use customer_provisioning::MockCustomerProvisioning;
pub use customer_provisioning::{CustomerProvisioning, CustomerProvisioningError};
#[cfg(test)]
pub use customer_source::MockCustomerSource;
pub use customer_source::{CustomerSource, CustomerSourceError, FixtureCustomerSource};
