//! # Store Errors

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backing store could not serve the query
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A car referenced a driver id that does not exist
    #[error("Unknown driver id: {0}")]
    UnknownDriver(u64),

    /// Seed data could not be read or is inconsistent
    #[error("Seed error: {0}")]
    Seed(String),
}
