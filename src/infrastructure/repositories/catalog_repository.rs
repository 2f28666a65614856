use crate::domain::admin::{CategoryInput, LanguageInput, NameInput, VoiceInput};
use crate::domain::catalog::{
    CatalogError, CatalogRepository, CatalogSnapshot, Category, ContentRepository, Gender,
    GeneralMessage, Language, MessageType, Name, PersonalMessage, Voice,
};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

const GENERAL_COLUMNS: &str =
    "id, category_id, theme_name, topic_name, text, audio_file, symbols, gender";
const PERSONAL_COLUMNS: &str = "id, name_id, text, type, audio_file";

/// Live catalog store backed by Postgres
pub struct PgCatalogRepository {
    pool: Arc<DbPool>,
}

impl PgCatalogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Export every table as a denormalized snapshot
    pub async fn export_snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        let pool = self.pool.as_ref();

        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, language_id FROM categories ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        let personal = sqlx::query_as::<_, PersonalMessage>(&format!(
            "SELECT {} FROM personal_messages ORDER BY id",
            PERSONAL_COLUMNS
        ))
        .fetch_all(pool)
        .await?;

        let general = sqlx::query_as::<_, GeneralMessage>(&format!(
            "SELECT {} FROM general_messages ORDER BY id",
            GENERAL_COLUMNS
        ))
        .fetch_all(pool)
        .await?;

        Ok(CatalogSnapshot {
            languages: self.list_languages().await?,
            voices: self.list_voices().await?,
            names: self.list_names().await?,
            categories,
            personal,
            general,
        })
    }

    // Languages

    pub async fn find_language(&self, language_id: i64) -> Result<Option<Language>, CatalogError> {
        let language = sqlx::query_as::<_, Language>(
            "SELECT id, name, code FROM languages WHERE id = $1",
        )
        .bind(language_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(language)
    }

    pub async fn create_language(&self, input: &LanguageInput) -> Result<Language, CatalogError> {
        let language = sqlx::query_as::<_, Language>(
            r#"
            INSERT INTO languages (name, code)
            VALUES ($1, $2)
            RETURNING id, name, code
            "#,
        )
        .bind(&input.name)
        .bind(&input.code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(language)
    }

    pub async fn update_language(
        &self,
        language_id: i64,
        input: &LanguageInput,
    ) -> Result<Option<Language>, CatalogError> {
        let language = sqlx::query_as::<_, Language>(
            r#"
            UPDATE languages
            SET name = $1, code = $2
            WHERE id = $3
            RETURNING id, name, code
            "#,
        )
        .bind(&input.name)
        .bind(&input.code)
        .bind(language_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(language)
    }

    pub async fn delete_language(&self, language_id: i64) -> Result<bool, CatalogError> {
        self.delete_by_id("languages", language_id).await
    }

    /// Voices, names and categories still pointing at a language
    pub async fn count_language_references(&self, language_id: i64) -> Result<i64, CatalogError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM voices WHERE language_id = $1)
              + (SELECT COUNT(*) FROM names WHERE language_id = $1)
              + (SELECT COUNT(*) FROM categories WHERE language_id = $1)
            "#,
        )
        .bind(language_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    // Voices

    pub async fn create_voice(&self, input: &VoiceInput) -> Result<Voice, CatalogError> {
        let voice = sqlx::query_as::<_, Voice>(
            r#"
            INSERT INTO voices (name, external_voice_id, gender, language_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, external_voice_id, gender, language_id
            "#,
        )
        .bind(&input.name)
        .bind(&input.external_voice_id)
        .bind(input.gender.as_str())
        .bind(input.language_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(voice)
    }

    pub async fn update_voice(
        &self,
        voice_id: i64,
        input: &VoiceInput,
    ) -> Result<Option<Voice>, CatalogError> {
        let voice = sqlx::query_as::<_, Voice>(
            r#"
            UPDATE voices
            SET name = $1, external_voice_id = $2, gender = $3, language_id = $4
            WHERE id = $5
            RETURNING id, name, external_voice_id, gender, language_id
            "#,
        )
        .bind(&input.name)
        .bind(&input.external_voice_id)
        .bind(input.gender.as_str())
        .bind(input.language_id)
        .bind(voice_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(voice)
    }

    pub async fn delete_voice(&self, voice_id: i64) -> Result<bool, CatalogError> {
        self.delete_by_id("voices", voice_id).await
    }

    // Names

    pub async fn create_name(&self, input: &NameInput) -> Result<Name, CatalogError> {
        let name = sqlx::query_as::<_, Name>(
            r#"
            INSERT INTO names (name, gender, language_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, gender, language_id
            "#,
        )
        .bind(&input.name)
        .bind(input.gender.as_str())
        .bind(input.language_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(name)
    }

    pub async fn update_name(
        &self,
        name_id: i64,
        input: &NameInput,
    ) -> Result<Option<Name>, CatalogError> {
        let name = sqlx::query_as::<_, Name>(
            r#"
            UPDATE names
            SET name = $1, gender = $2, language_id = $3
            WHERE id = $4
            RETURNING id, name, gender, language_id
            "#,
        )
        .bind(&input.name)
        .bind(input.gender.as_str())
        .bind(input.language_id)
        .bind(name_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(name)
    }

    pub async fn delete_name(&self, name_id: i64) -> Result<bool, CatalogError> {
        self.delete_by_id("names", name_id).await
    }

    // Categories

    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, language_id FROM categories ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(categories)
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, CatalogError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, language_id)
            VALUES ($1, $2)
            RETURNING id, name, language_id
            "#,
        )
        .bind(&input.name)
        .bind(input.language_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        input: &CategoryInput,
    ) -> Result<Option<Category>, CatalogError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, language_id = $2
            WHERE id = $3
            RETURNING id, name, language_id
            "#,
        )
        .bind(&input.name)
        .bind(input.language_id)
        .bind(category_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<bool, CatalogError> {
        self.delete_by_id("categories", category_id).await
    }

    async fn delete_by_id(&self, table: &'static str, id: i64) -> Result<bool, CatalogError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_languages(&self) -> Result<Vec<Language>, CatalogError> {
        let languages =
            sqlx::query_as::<_, Language>("SELECT id, name, code FROM languages ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(languages)
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, CatalogError> {
        let voices = sqlx::query_as::<_, Voice>(
            "SELECT id, name, external_voice_id, gender, language_id FROM voices ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(voices)
    }

    async fn list_names(&self) -> Result<Vec<Name>, CatalogError> {
        let names = sqlx::query_as::<_, Name>(
            "SELECT id, name, gender, language_id FROM names ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(names)
    }

    async fn list_theme_names(&self) -> Result<Vec<String>, CatalogError> {
        let themes =
            sqlx::query_scalar::<_, String>("SELECT theme_name FROM general_messages ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(themes)
    }

    async fn find_name(&self, name_id: i64) -> Result<Option<Name>, CatalogError> {
        let name = sqlx::query_as::<_, Name>(
            "SELECT id, name, gender, language_id FROM names WHERE id = $1",
        )
        .bind(name_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(name)
    }

    async fn find_voice(&self, voice_id: i64) -> Result<Option<Voice>, CatalogError> {
        let voice = sqlx::query_as::<_, Voice>(
            "SELECT id, name, external_voice_id, gender, language_id FROM voices WHERE id = $1",
        )
        .bind(voice_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(voice)
    }

    async fn find_greeting(&self, name_id: i64) -> Result<Option<PersonalMessage>, CatalogError> {
        let greeting = sqlx::query_as::<_, PersonalMessage>(&format!(
            r#"
            SELECT {}
            FROM personal_messages
            WHERE name_id = $1 AND type = $2
            ORDER BY id
            LIMIT 1
            "#,
            PERSONAL_COLUMNS
        ))
        .bind(name_id)
        .bind(MessageType::Greeting.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(greeting)
    }

    async fn find_general_candidates(
        &self,
        theme_name: &str,
        gender: Gender,
        language_id: i64,
    ) -> Result<Vec<GeneralMessage>, CatalogError> {
        let candidates = sqlx::query_as::<_, GeneralMessage>(
            r#"
            SELECT g.id, g.category_id, g.theme_name, g.topic_name, g.text,
                   g.audio_file, g.symbols, g.gender
            FROM general_messages g
            JOIN categories c ON c.id = g.category_id
            WHERE g.theme_name = $1 AND g.gender = $2 AND c.language_id = $3
            ORDER BY g.id
            "#,
        )
        .bind(theme_name)
        .bind(gender.as_str())
        .bind(language_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(candidates)
    }
}

#[async_trait]
impl ContentRepository for PgCatalogRepository {
    async fn get_language(&self, language_id: i64) -> Result<Option<Language>, CatalogError> {
        self.find_language(language_id).await
    }

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, CatalogError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, language_id FROM categories WHERE id = $1",
        )
        .bind(category_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    async fn get_name(&self, name_id: i64) -> Result<Option<Name>, CatalogError> {
        self.find_name(name_id).await
    }

    async fn first_voice_for(
        &self,
        language_id: i64,
        gender: Gender,
    ) -> Result<Option<Voice>, CatalogError> {
        let voice = sqlx::query_as::<_, Voice>(
            r#"
            SELECT id, name, external_voice_id, gender, language_id
            FROM voices
            WHERE language_id = $1 AND gender = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(language_id)
        .bind(gender.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(voice)
    }

    async fn get_general(&self, general_id: i64) -> Result<Option<GeneralMessage>, CatalogError> {
        let general = sqlx::query_as::<_, GeneralMessage>(&format!(
            "SELECT {} FROM general_messages WHERE id = $1",
            GENERAL_COLUMNS
        ))
        .bind(general_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(general)
    }

    async fn list_general_for_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<GeneralMessage>, CatalogError> {
        let general = sqlx::query_as::<_, GeneralMessage>(&format!(
            "SELECT {} FROM general_messages WHERE category_id = $1 ORDER BY id",
            GENERAL_COLUMNS
        ))
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(general)
    }

    async fn insert_general_topic(
        &self,
        category_id: i64,
        theme_name: &str,
        topic_name: &str,
        gender: Gender,
    ) -> Result<i64, CatalogError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO general_messages (category_id, theme_name, topic_name, gender)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(category_id)
        .bind(theme_name)
        .bind(topic_name)
        .bind(gender.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn update_general_text(
        &self,
        general_id: i64,
        text: &str,
        symbols: i32,
    ) -> Result<(), CatalogError> {
        sqlx::query("UPDATE general_messages SET text = $1, symbols = $2 WHERE id = $3")
            .bind(text)
            .bind(symbols)
            .bind(general_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn update_general_audio(
        &self,
        general_id: i64,
        audio_file: &str,
    ) -> Result<(), CatalogError> {
        sqlx::query("UPDATE general_messages SET audio_file = $1 WHERE id = $2")
            .bind(audio_file)
            .bind(general_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get_personal(&self, personal_id: i64) -> Result<Option<PersonalMessage>, CatalogError> {
        let personal = sqlx::query_as::<_, PersonalMessage>(&format!(
            "SELECT {} FROM personal_messages WHERE id = $1",
            PERSONAL_COLUMNS
        ))
        .bind(personal_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(personal)
    }

    async fn list_personal_for_name(
        &self,
        name_id: i64,
    ) -> Result<Vec<PersonalMessage>, CatalogError> {
        let personal = sqlx::query_as::<_, PersonalMessage>(&format!(
            "SELECT {} FROM personal_messages WHERE name_id = $1 ORDER BY id",
            PERSONAL_COLUMNS
        ))
        .bind(name_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(personal)
    }

    async fn insert_personal(
        &self,
        name_id: i64,
        text: &str,
        message_type: MessageType,
    ) -> Result<PersonalMessage, CatalogError> {
        let personal = sqlx::query_as::<_, PersonalMessage>(&format!(
            r#"
            INSERT INTO personal_messages (name_id, text, type)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            PERSONAL_COLUMNS
        ))
        .bind(name_id)
        .bind(text)
        .bind(message_type.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(personal)
    }

    async fn update_personal_audio(
        &self,
        personal_id: i64,
        audio_file: &str,
    ) -> Result<(), CatalogError> {
        sqlx::query("UPDATE personal_messages SET audio_file = $1 WHERE id = $2")
            .bind(audio_file)
            .bind(personal_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_personal(&self, personal_id: i64) -> Result<bool, CatalogError> {
        self.delete_by_id("personal_messages", personal_id).await
    }
}
