use crate::domain::assets::AssetServiceError;
use crate::domain::catalog::CatalogError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SelectionServiceError {
    #[error("Name not found")]
    NameNotFound,
    #[error("Personal greeting not found")]
    GreetingNotFound,
    #[error("Greeting audio not found")]
    GreetingAudioNotFound,
    #[error("Voice not found")]
    VoiceNotFound,
    #[error("Voice does not match the selected name")]
    VoiceMismatch,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Asset(#[from] AssetServiceError),
}

impl From<SelectionServiceError> for AppError {
    fn from(err: SelectionServiceError) -> Self {
        match err {
            SelectionServiceError::Catalog(e) => e.into(),
            SelectionServiceError::Asset(e) => e.into(),
            not_found => AppError::BadRequest(not_found.to_string()),
        }
    }
}
