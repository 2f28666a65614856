pub mod dto;
pub mod error;
pub mod service;

pub use dto::{CategoryInput, LanguageDeletion, LanguageInput, NameInput, SnapshotSummary, VoiceInput};
pub use error::AdminServiceError;
pub use service::{AdminService, AdminServiceApi};
