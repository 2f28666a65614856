pub mod dto;
pub mod error;
pub mod flags;
pub mod service;

pub use dto::{CatalogOptions, LanguageOption, NameOption, TopicOption, VoiceOption};
pub use error::OptionsServiceError;
pub use flags::language_flag;
pub use service::{OptionsService, OptionsServiceApi};
