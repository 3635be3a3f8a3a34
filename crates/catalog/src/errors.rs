use thiserror::Error;

/// Outcome taxonomy of every store operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Single-record fetch found no row; the payload is the entity name.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    /// Connectivity, pool exhaustion or any other storage failure.
    #[error("{0}")]
    Storage(String),
}

impl CatalogError {
    pub fn worker_not_found() -> Self { Self::NotFound("Worker") }
    pub fn service_not_found() -> Self { Self::NotFound("Service") }

    /// Stable code for logs and metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => "not_found",
            CatalogError::Validation(_) => "validation",
            CatalogError::Storage(_) => "storage",
        }
    }
}

impl From<models::errors::ModelError> for CatalogError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(m) => CatalogError::Validation(m),
            models::errors::ModelError::Db(m) => CatalogError::Storage(m),
        }
    }
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(e: sea_orm::DbErr) -> Self {
        CatalogError::Storage(e.to_string())
    }
}
