//! Shared Diesel error mapping for repositories whose ports only distinguish
//! connection failures from query failures.
//!
//! The database message is logged at `debug` and replaced with a fixed
//! phrase; adapters never forward raw driver text.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout(message) | PoolError::Build(message) => message,
    };
    connection(message)
}

/// Emit debug context for a failed Diesel operation.
pub(crate) fn log_diesel_error(error: &DieselError, operation: &str) {
    match error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = info.constraint_name(),
            operation,
            "diesel operation failed"
        ),
        other => debug!(%other, operation, "diesel operation failed"),
    }
}

/// Map Diesel errors into query/connection constructors.
pub(crate) fn map_basic_diesel_error<E, Q, C>(
    error: DieselError,
    operation: &str,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    log_diesel_error(&error, operation);
    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}
