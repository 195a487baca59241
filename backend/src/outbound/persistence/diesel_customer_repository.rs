//! PostgreSQL-backed customer repository using Diesel ORM.
//!
//! Implements the read port [`CustomerSource`] used by the batch and the
//! write port [`CustomerProvisioning`] used by seeding tooling. Each read
//! checks out its own connection, so the two fetches of a batch run proceed
//! independently.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    CustomerProvisioning, CustomerProvisioningError, CustomerSource, CustomerSourceError,
};
use crate::domain::{Corporate, Individual};

use super::diesel_basic_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, map_write_diesel_error,
};
use super::models::{CorporateRow, IndividualRow, NewCorporateRow, NewIndividualRow};
use super::pool::{DbPool, PoolError};
use super::schema::{corporates, individuals};

/// Diesel-backed implementation of the customer ports.
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_source_pool_error(error: PoolError) -> CustomerSourceError {
    map_basic_pool_error(&error, CustomerSourceError::connection)
}

fn map_source_diesel_error(error: diesel::result::Error) -> CustomerSourceError {
    map_basic_diesel_error(
        error,
        CustomerSourceError::query,
        CustomerSourceError::connection,
    )
}

fn map_provisioning_pool_error(error: PoolError) -> CustomerProvisioningError {
    map_basic_pool_error(&error, CustomerProvisioningError::connection)
}

fn map_provisioning_diesel_error(error: diesel::result::Error) -> CustomerProvisioningError {
    map_write_diesel_error(
        error,
        CustomerProvisioningError::query,
        CustomerProvisioningError::connection,
        CustomerProvisioningError::duplicate,
    )
}

#[async_trait]
impl CustomerSource for DieselCustomerRepository {
    async fn fetch_individuals(&self) -> Result<Vec<Individual>, CustomerSourceError> {
        let mut conn = self.pool.get().await.map_err(map_source_pool_error)?;

        let rows: Vec<IndividualRow> = individuals::table
            .order(individuals::id.asc())
            .select(IndividualRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_source_diesel_error)?;

        Ok(rows.into_iter().map(Individual::from).collect())
    }

    async fn fetch_corporates(&self) -> Result<Vec<Corporate>, CustomerSourceError> {
        let mut conn = self.pool.get().await.map_err(map_source_pool_error)?;

        let rows: Vec<CorporateRow> = corporates::table
            .order(corporates::id.asc())
            .select(CorporateRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_source_diesel_error)?;

        Ok(rows.into_iter().map(Corporate::from).collect())
    }
}

#[async_trait]
impl CustomerProvisioning for DieselCustomerRepository {
    async fn create_individual(
        &self,
        name: &str,
        email: &str,
    ) -> Result<(), CustomerProvisioningError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_provisioning_pool_error)?;

        diesel::insert_into(individuals::table)
            .values(&NewIndividualRow { name, email })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_provisioning_diesel_error)
    }

    async fn create_corporate(&self, name: &str) -> Result<(), CustomerProvisioningError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_provisioning_pool_error)?;

        diesel::insert_into(corporates::table)
            .values(&NewCorporateRow { name })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_provisioning_diesel_error)
    }
}
