//! Shared Diesel error mapping for the customer repository.
//!
//! Read and write ports expose different error enums, so the helpers take
//! constructor closures and leave the choice of variant to the caller.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a port-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: &PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.message().to_owned())
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map Diesel errors raised by reads into query/connection constructors.
///
/// The database message is forwarded so a missing table or column is
/// identifiable in the warning emitted for the failed source.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    log_diesel_error(&error);

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => query(info.message().to_owned()),
        DieselError::QueryBuilderError(_) => query("database query error".to_owned()),
        other => query(other.to_string()),
    }
}

/// Map Diesel errors raised by inserts, singling out unique violations.
pub(crate) fn map_write_diesel_error<E, Q, C, D>(
    error: DieselError,
    query: Q,
    connection: C,
    duplicate: D,
) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
    D: FnOnce(String) -> E,
{
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!(
                constraint = info.constraint_name(),
                message = info.message(),
                "unique constraint rejected insert"
            );
            duplicate(info.message().to_owned())
        }
        other => map_basic_diesel_error(other, query, connection),
    }
}
