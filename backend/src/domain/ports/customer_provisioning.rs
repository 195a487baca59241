//! Driven port for populating the customer store.
//!
//! Provisioning belongs to tooling around the batch (seeding, fixtures); the
//! batch service never calls it. Adapter errors are surfaced to the caller
//! unchanged.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer provisioning adapters.
    pub enum CustomerProvisioningError {
        /// Connection to the backing store could not be established.
        Connection { message: String } =>
            "customer provisioning connection failed: {message}",
        /// The insert failed for a reason other than a uniqueness conflict.
        Query { message: String } =>
            "customer provisioning query failed: {message}",
        /// A unique constraint rejected the insert.
        Duplicate { message: String } =>
            "customer already exists: {message}",
    }
}

/// Port for inserting new customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerProvisioning: Send + Sync {
    /// Insert an individual. `email` must be unique across individuals.
    async fn create_individual(
        &self,
        name: &str,
        email: &str,
    ) -> Result<(), CustomerProvisioningError>;

    /// Insert a corporate.
    async fn create_corporate(&self, name: &str) -> Result<(), CustomerProvisioningError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn duplicate_error_formats_message() {
        let error = CustomerProvisioningError::duplicate("email a@example.com");
        assert_eq!(
            error.to_string(),
            "customer already exists: email a@example.com"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn mock_provisioning_propagates_errors_verbatim() {
        let mut provisioning = MockCustomerProvisioning::new();
        provisioning
            .expect_create_individual()
            .withf(|name, email| name == "個人B" && email == "dup@example.com")
            .times(1)
            .return_once(|_, _| Err(CustomerProvisioningError::duplicate("dup@example.com")));

        let error = provisioning
            .create_individual("個人B", "dup@example.com")
            .await
            .expect_err("duplicate");
        assert_eq!(error, CustomerProvisioningError::duplicate("dup@example.com"));
    }
}
