pub mod error;
pub mod service;

pub use error::AssetServiceError;
pub use service::{AssetService, AssetServiceApi, AUDIO_CONTENT_TYPE, AUDIO_EXTENSION};
