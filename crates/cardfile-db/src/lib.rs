mod error;
mod models;
mod repository;
mod schema;
mod validation;

pub use error::{Result, StoreError};
pub use models::*;
pub use repository::ContactDb;
