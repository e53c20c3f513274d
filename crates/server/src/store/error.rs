use deadpool_sqlite::{InteractError, PoolError};
use shared::{
    api::error::{ServerError, ValidationError},
    types::UuidError,
};
use thiserror::Error;

/// Failure of a store operation
///
/// A record that doesn't exist is not an error, lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Getting a database connection: {0}")]
    Pool(#[from] PoolError),
    #[error("Running on the database connection: {0}")]
    Interact(String),
    #[error("Sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Malformed id {id:?}: {source}")]
    MalformedId {
        id: String,
        #[source]
        source: UuidError,
    },
    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),
}

impl From<InteractError> for StoreError {
    fn from(err: InteractError) -> Self {
        StoreError::Interact(err.to_string())
    }
}

impl<T> From<StoreError> for ServerError<T> {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId { .. } => ServerError::BadRequest {
                message: err.to_string(),
            },
            StoreError::Validation(inner) => ServerError::Validation { inner },
            err => ServerError::Other {
                message: err.to_string(),
            },
        }
    }
}
