use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AssetServiceError {
    #[error("object storage unavailable: {0}")]
    Unavailable(String),
    #[error("invalid object key: {0}")]
    InvalidKey(String),
}

impl From<AssetServiceError> for AppError {
    fn from(err: AssetServiceError) -> Self {
        match err {
            AssetServiceError::Unavailable(msg) => AppError::ExternalService(msg),
            AssetServiceError::InvalidKey(msg) => AppError::BadRequest(msg),
        }
    }
}
