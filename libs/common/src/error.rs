//! Error types for the database layer

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failures raised while setting up or probing the database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The connection pool could not be established
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A query against an established pool failed
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// The configuration read from the environment is unusable
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
