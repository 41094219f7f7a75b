use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid contact: {0}")]
    Validation(String),

    #[error("No contact with id {0}")]
    NotFound(i64),

    #[error("Could not open contact database: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    Write(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
