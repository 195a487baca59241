//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`. The
//! helpers here locate the test database, serialise access to it, and reset
//! the customer schema between tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use customer_batch::outbound::persistence::run_pending_migrations;
use postgres::{Client, NoTls};

/// Environment variable naming the PostgreSQL instance used by integration
/// tests. Tests are skipped when it is unset.
pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

static DATABASE_LOCK: Mutex<()> = Mutex::new(());

/// Describe a failed schema reset, keeping the SQLSTATE when the server
/// supplied one.
pub fn describe_reset_failure(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db_error) => format!(
            "schema reset failed ({:?}): {}",
            db_error.code(),
            db_error.message()
        ),
        None => format!("schema reset failed: {error}"),
    }
}

/// Returns the configured test database URL, or `None` after printing a skip
/// marker when it is unset or blank.
pub fn test_database_url(test_name: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!(
                "SKIP-TEST-DATABASE: {test_name} skipped; {TEST_DATABASE_URL_ENV} is unset"
            );
            None
        }
    }
}

/// Hold the database for the lifetime of the returned guard.
///
/// Every test resets the same schema, so tests in one binary must not
/// overlap.
pub fn lock_database() -> MutexGuard<'static, ()> {
    DATABASE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drop the customer tables and migration history, then migrate from
/// scratch.
pub fn reset_schema(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| describe_reset_failure(&err))?;
    client
        .batch_execute(
            "DROP TABLE IF EXISTS individuals, corporates, __diesel_schema_migrations",
        )
        .map_err(|err| describe_reset_failure(&err))?;
    run_pending_migrations(url).map_err(|err| err.to_string())?;
    Ok(())
}

/// Drop a single table so reads against it fail.
pub fn drop_table(url: &str, table: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| describe_reset_failure(&err))?;
    client
        .batch_execute(&format!("DROP TABLE {table}"))
        .map_err(|err| describe_reset_failure(&err))
}
