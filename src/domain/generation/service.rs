use super::dto::{GenerateThemesRequest, ThemeGenerationResult};
use super::error::GenerationServiceError;
use super::prompts::{general_text_prompt, parse_themes, personal_prompt, themes_prompt};
use crate::domain::assets::AssetServiceApi;
use crate::domain::catalog::{
    CatalogError, Category, ContentRepository, Gender, GeneralMessage, Language, MessageType,
    PersonalMessage, Voice,
};
use crate::infrastructure::repositories::{TextGenerationRepository, TtsRepository};
use async_trait::async_trait;
use std::future::Future;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

const COUNT_RANGE: RangeInclusive<u32> = 1..=100;

/// Drives text generation, speech synthesis and asset publishing for catalog rows.
///
/// A row only advances after the step that fills it succeeded: text is stored
/// after generation, the audio key only after synthesis and upload.
pub struct GenerationService {
    content: Arc<dyn ContentRepository>,
    text_repo: Arc<dyn TextGenerationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    assets: Arc<dyn AssetServiceApi>,
    call_timeout: Duration,
}

impl GenerationService {
    pub fn new(
        content: Arc<dyn ContentRepository>,
        text_repo: Arc<dyn TextGenerationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        assets: Arc<dyn AssetServiceApi>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            content,
            text_repo,
            tts_repo,
            assets,
            call_timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F, what: &str) -> Result<T, String>
    where
        F: Future<Output = Result<T, String>>,
    {
        tokio::time::timeout(self.call_timeout, call)
            .await
            .map_err(|_| format!("{} timed out after {}s", what, self.call_timeout.as_secs()))?
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationServiceError> {
        let answer = self
            .bounded(self.text_repo.complete(prompt), "text generation")
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Text generation failed");
                GenerationServiceError::Unavailable(e)
            })?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(GenerationServiceError::Unavailable(
                "empty completion".to_string(),
            ));
        }
        Ok(answer.to_string())
    }

    /// Synthesize and upload, returning the new object key
    async fn voice_text(&self, text: &str, voice: &Voice) -> Result<String, GenerationServiceError> {
        let audio = self
            .bounded(
                self.tts_repo.synthesize(text, &voice.external_voice_id),
                "speech synthesis",
            )
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id = voice.id, "Speech synthesis failed");
                GenerationServiceError::SynthesisUnavailable(e)
            })?;

        Ok(self.assets.publish(audio).await?)
    }

    async fn category(&self, category_id: i64) -> Result<Category, GenerationServiceError> {
        self.content
            .get_category(category_id)
            .await?
            .ok_or_else(|| GenerationServiceError::NotFound("Category not found".to_string()))
    }

    async fn language(&self, language_id: i64) -> Result<Language, GenerationServiceError> {
        self.content
            .get_language(language_id)
            .await?
            .ok_or_else(|| GenerationServiceError::Invalid("Language not found".to_string()))
    }

    async fn voice(&self, language_id: i64, gender: Gender) -> Result<Voice, GenerationServiceError> {
        self.content
            .first_voice_for(language_id, gender)
            .await?
            .ok_or_else(|| {
                GenerationServiceError::Invalid(format!(
                    "No {} voice for language {}",
                    gender, language_id
                ))
            })
    }

    async fn general(&self, general_id: i64) -> Result<GeneralMessage, GenerationServiceError> {
        self.content
            .get_general(general_id)
            .await?
            .ok_or_else(|| GenerationServiceError::NotFound("General message not found".to_string()))
    }

    async fn personal(&self, personal_id: i64) -> Result<PersonalMessage, GenerationServiceError> {
        self.content
            .get_personal(personal_id)
            .await?
            .ok_or_else(|| {
                GenerationServiceError::NotFound("Personal message not found".to_string())
            })
    }
}

fn stored_text(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

fn symbol_count(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}

#[async_trait]
pub trait GenerationServiceApi: Send + Sync {
    /// Generate theme/topic pairs for a category and store one general row per pair.
    ///
    /// Pairs that already exist are counted as skipped. Nothing is written when
    /// the generated answer cannot be parsed.
    async fn generate_themes(
        &self,
        category_id: i64,
        request: GenerateThemesRequest,
    ) -> Result<ThemeGenerationResult, GenerationServiceError>;

    async fn list_general(&self, category_id: i64)
        -> Result<Vec<GeneralMessage>, GenerationServiceError>;

    async fn generate_general_text(
        &self,
        general_id: i64,
    ) -> Result<GeneralMessage, GenerationServiceError>;

    async fn synthesize_general(
        &self,
        general_id: i64,
    ) -> Result<GeneralMessage, GenerationServiceError>;

    /// Generate, store and voice a personal message for a name
    async fn generate_personal(
        &self,
        name_id: i64,
        message_type: MessageType,
    ) -> Result<PersonalMessage, GenerationServiceError>;

    async fn list_personal(&self, name_id: i64)
        -> Result<Vec<PersonalMessage>, GenerationServiceError>;

    async fn synthesize_personal(
        &self,
        personal_id: i64,
    ) -> Result<PersonalMessage, GenerationServiceError>;

    async fn delete_personal(&self, personal_id: i64) -> Result<(), GenerationServiceError>;
}

#[async_trait]
impl GenerationServiceApi for GenerationService {
    async fn generate_themes(
        &self,
        category_id: i64,
        request: GenerateThemesRequest,
    ) -> Result<ThemeGenerationResult, GenerationServiceError> {
        if !COUNT_RANGE.contains(&request.theme_count)
            || !COUNT_RANGE.contains(&request.topics_per_theme)
        {
            return Err(GenerationServiceError::Invalid(
                "theme_count and topics_per_theme must be between 1 and 100".to_string(),
            ));
        }

        let category = self.category(category_id).await?;
        let language = self.language(category.language_id).await?;
        // Topics are useless if nobody can voice them later
        self.voice(category.language_id, request.gender).await?;

        let prompt = themes_prompt(
            &category.name,
            request.description.trim(),
            request.theme_count,
            request.topics_per_theme,
            &language.code,
        );
        let answer = self.complete(&prompt).await?;

        let generated = parse_themes(&answer).map_err(|e| {
            tracing::warn!(error = %e, category_id, "Generated themes are not valid JSON");
            GenerationServiceError::Parse(e.to_string())
        })?;

        let mut result = ThemeGenerationResult {
            inserted: 0,
            skipped: 0,
        };

        for theme in &generated.themes {
            let theme_name = theme.theme_name.trim();
            if theme_name.is_empty() {
                continue;
            }

            for topic in &theme.topics {
                let topic_name = topic.trim();
                if topic_name.is_empty() {
                    continue;
                }

                match self
                    .content
                    .insert_general_topic(category.id, theme_name, topic_name, request.gender)
                    .await
                {
                    Ok(_) => result.inserted += 1,
                    Err(CatalogError::ConstraintViolation(_)) => {
                        tracing::debug!(theme_name, topic_name, "Topic already exists, skipping");
                        result.skipped += 1;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        tracing::info!(
            category_id,
            gender = %request.gender,
            themes = generated.themes.len(),
            inserted = result.inserted,
            skipped = result.skipped,
            "Themes generated"
        );

        Ok(result)
    }

    async fn list_general(
        &self,
        category_id: i64,
    ) -> Result<Vec<GeneralMessage>, GenerationServiceError> {
        let category = self.category(category_id).await?;
        Ok(self.content.list_general_for_category(category.id).await?)
    }

    async fn generate_general_text(
        &self,
        general_id: i64,
    ) -> Result<GeneralMessage, GenerationServiceError> {
        let mut general = self.general(general_id).await?;
        let category = self.category(general.category_id).await?;
        let language = self.language(category.language_id).await?;

        let prompt = general_text_prompt(
            &language.name,
            &general.theme_name,
            &general.topic_name,
            general.gender,
        );
        let text = self.complete(&prompt).await?;
        let symbols = symbol_count(&text);

        self.content
            .update_general_text(general.id, &text, symbols)
            .await?;

        tracing::info!(general_id = general.id, symbols, "General text generated");

        general.text = Some(text);
        general.symbols = Some(symbols);
        Ok(general)
    }

    async fn synthesize_general(
        &self,
        general_id: i64,
    ) -> Result<GeneralMessage, GenerationServiceError> {
        let mut general = self.general(general_id).await?;
        let text = stored_text(&general.text)
            .ok_or_else(|| {
                GenerationServiceError::Invalid("General message has no text".to_string())
            })?
            .to_string();

        let category = self.category(general.category_id).await?;
        let voice = self.voice(category.language_id, general.gender).await?;

        let object_key = self.voice_text(&text, &voice).await?;
        self.content
            .update_general_audio(general.id, &object_key)
            .await?;

        tracing::info!(general_id = general.id, key = %object_key, "General audio stored");

        general.audio_file = Some(object_key);
        Ok(general)
    }

    async fn generate_personal(
        &self,
        name_id: i64,
        message_type: MessageType,
    ) -> Result<PersonalMessage, GenerationServiceError> {
        let name = self
            .content
            .get_name(name_id)
            .await?
            .ok_or_else(|| GenerationServiceError::NotFound("Name not found".to_string()))?;
        let language = self.language(name.language_id).await?;
        let voice = self.voice(name.language_id, name.gender).await?;

        let prompt = personal_prompt(&name.name, message_type, &language.name);
        let text = self.complete(&prompt).await?;

        let mut personal = self
            .content
            .insert_personal(name.id, &text, message_type)
            .await?;

        // The row keeps its text even when voicing fails; audio can be retried
        let object_key = self.voice_text(&text, &voice).await?;
        self.content
            .update_personal_audio(personal.id, &object_key)
            .await?;

        tracing::info!(
            name_id = name.id,
            personal_id = personal.id,
            message_type = %message_type,
            "Personal message generated"
        );

        personal.audio_file = Some(object_key);
        Ok(personal)
    }

    async fn list_personal(
        &self,
        name_id: i64,
    ) -> Result<Vec<PersonalMessage>, GenerationServiceError> {
        let name = self
            .content
            .get_name(name_id)
            .await?
            .ok_or_else(|| GenerationServiceError::NotFound("Name not found".to_string()))?;
        Ok(self.content.list_personal_for_name(name.id).await?)
    }

    async fn synthesize_personal(
        &self,
        personal_id: i64,
    ) -> Result<PersonalMessage, GenerationServiceError> {
        let mut personal = self.personal(personal_id).await?;
        let text = stored_text(&personal.text)
            .ok_or_else(|| {
                GenerationServiceError::Invalid("Personal message has no text".to_string())
            })?
            .to_string();

        let name = self
            .content
            .get_name(personal.name_id)
            .await?
            .ok_or_else(|| GenerationServiceError::NotFound("Name not found".to_string()))?;
        let voice = self.voice(name.language_id, name.gender).await?;

        let object_key = self.voice_text(&text, &voice).await?;
        self.content
            .update_personal_audio(personal.id, &object_key)
            .await?;

        personal.audio_file = Some(object_key);
        Ok(personal)
    }

    async fn delete_personal(&self, personal_id: i64) -> Result<(), GenerationServiceError> {
        if !self.content.delete_personal(personal_id).await? {
            return Err(GenerationServiceError::NotFound(
                "Personal message not found".to_string(),
            ));
        }
        Ok(())
    }
}
