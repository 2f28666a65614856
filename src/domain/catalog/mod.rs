pub mod error;
pub mod model;
pub mod snapshot;

pub use error::CatalogError;
pub use model::{Category, Gender, GeneralMessage, Language, MessageType, Name, PersonalMessage, Voice};
pub use snapshot::CatalogSnapshot;

use async_trait::async_trait;

/// Read access to the catalog used by the public selection and options endpoints.
///
/// Implemented by the live Postgres store and by the in-memory snapshot. Both
/// implementations must return rows in ascending id order so that resolving
/// against either source behaves the same.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_languages(&self) -> Result<Vec<Language>, CatalogError>;

    async fn list_voices(&self) -> Result<Vec<Voice>, CatalogError>;

    async fn list_names(&self) -> Result<Vec<Name>, CatalogError>;

    /// Theme name of every general message, duplicates included
    async fn list_theme_names(&self) -> Result<Vec<String>, CatalogError>;

    async fn find_name(&self, name_id: i64) -> Result<Option<Name>, CatalogError>;

    async fn find_voice(&self, voice_id: i64) -> Result<Option<Voice>, CatalogError>;

    /// Canonical greeting of a name: the greeting row with the lowest id
    async fn find_greeting(&self, name_id: i64) -> Result<Option<PersonalMessage>, CatalogError>;

    /// General messages with the given theme and gender whose category uses `language_id`
    async fn find_general_candidates(
        &self,
        theme_name: &str,
        gender: Gender,
        language_id: i64,
    ) -> Result<Vec<GeneralMessage>, CatalogError>;
}

/// Read/write access needed by the content generation workflows
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get_language(&self, language_id: i64) -> Result<Option<Language>, CatalogError>;

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, CatalogError>;

    async fn get_name(&self, name_id: i64) -> Result<Option<Name>, CatalogError>;

    /// First voice (lowest id) for a language and gender
    async fn first_voice_for(
        &self,
        language_id: i64,
        gender: Gender,
    ) -> Result<Option<Voice>, CatalogError>;

    async fn get_general(&self, general_id: i64) -> Result<Option<GeneralMessage>, CatalogError>;

    async fn list_general_for_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<GeneralMessage>, CatalogError>;

    async fn insert_general_topic(
        &self,
        category_id: i64,
        theme_name: &str,
        topic_name: &str,
        gender: Gender,
    ) -> Result<i64, CatalogError>;

    async fn update_general_text(
        &self,
        general_id: i64,
        text: &str,
        symbols: i32,
    ) -> Result<(), CatalogError>;

    async fn update_general_audio(&self, general_id: i64, audio_file: &str)
        -> Result<(), CatalogError>;

    async fn get_personal(&self, personal_id: i64) -> Result<Option<PersonalMessage>, CatalogError>;

    async fn list_personal_for_name(&self, name_id: i64)
        -> Result<Vec<PersonalMessage>, CatalogError>;

    async fn insert_personal(
        &self,
        name_id: i64,
        text: &str,
        message_type: MessageType,
    ) -> Result<PersonalMessage, CatalogError>;

    async fn update_personal_audio(
        &self,
        personal_id: i64,
        audio_file: &str,
    ) -> Result<(), CatalogError>;

    async fn delete_personal(&self, personal_id: i64) -> Result<bool, CatalogError>;
}
