pub mod dto;
pub mod error;
pub mod prompts;
pub mod service;

pub use dto::{GeneratePersonalRequest, GenerateThemesRequest, ThemeGenerationResult};
pub use error::GenerationServiceError;
pub use service::{GenerationService, GenerationServiceApi};
