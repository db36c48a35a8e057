use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Category {0} not found")]
    CategoryNotFound(Uuid),

    #[error("Product {0} not found")]
    ProductNotFound(Uuid),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to decode stored document: {0}")]
    Decode(String),
}
