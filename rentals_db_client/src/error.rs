//! Database errors for rental data operations

use thiserror::Error;

/// Errors that can occur during database operations.
///
/// This layer does not translate driver errors: constraint violations and
/// connection failures surface exactly as sqlx reports them.
#[derive(Debug, Error)]
pub enum RentalsDbError {
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}
