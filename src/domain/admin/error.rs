use crate::domain::catalog::CatalogError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<AdminServiceError> for AppError {
    fn from(err: AdminServiceError) -> Self {
        match err {
            AdminServiceError::NotFound(msg) => AppError::NotFound(msg),
            AdminServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AdminServiceError::Catalog(e) => e.into(),
        }
    }
}
