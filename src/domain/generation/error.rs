use crate::domain::assets::AssetServiceError;
use crate::domain::catalog::CatalogError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum GenerationServiceError {
    #[error("generated content could not be parsed: {0}")]
    Parse(String),
    #[error("text generation unavailable: {0}")]
    Unavailable(String),
    #[error("speech synthesis unavailable: {0}")]
    SynthesisUnavailable(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Asset(#[from] AssetServiceError),
}

impl From<GenerationServiceError> for AppError {
    fn from(err: GenerationServiceError) -> Self {
        match err {
            GenerationServiceError::Parse(_) => {
                AppError::ExternalService("Generated themes could not be parsed".to_string())
            }
            GenerationServiceError::Unavailable(_) => {
                AppError::ExternalService("Text generation unavailable".to_string())
            }
            GenerationServiceError::SynthesisUnavailable(_) => {
                AppError::ExternalService("Speech synthesis unavailable".to_string())
            }
            GenerationServiceError::NotFound(msg) => AppError::NotFound(msg),
            GenerationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            GenerationServiceError::Catalog(e) => e.into(),
            GenerationServiceError::Asset(e) => e.into(),
        }
    }
}
