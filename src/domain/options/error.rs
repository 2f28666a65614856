use crate::domain::catalog::CatalogError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum OptionsServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<OptionsServiceError> for AppError {
    fn from(err: OptionsServiceError) -> Self {
        match err {
            OptionsServiceError::Catalog(e) => e.into(),
        }
    }
}
