use super::dto::SimulateApiCallQuery;
use super::error::SelectionServiceError;
use super::sampling::sample_general;
use crate::domain::assets::AssetServiceApi;
use crate::domain::catalog::{CatalogRepository, Name};
use async_trait::async_trait;
use std::sync::Arc;

/// Caller selection, already parsed from the query string.
///
/// Ids that were missing or not numeric are `None`.
#[derive(Debug, Clone, Default)]
pub struct SelectionRequest {
    pub voice_id: Option<i64>,
    pub language_code: Option<String>,
    pub name_id: Option<i64>,
    pub topic: Option<String>,
}

fn parse_id(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

impl From<SimulateApiCallQuery> for SelectionRequest {
    fn from(query: SimulateApiCallQuery) -> Self {
        Self {
            voice_id: parse_id(&query.selected_voice),
            language_code: query.selected_language,
            name_id: parse_id(&query.selected_name),
            topic: query.selected_topic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub greeting_url: String,
    pub general_urls: Vec<String>,
}

impl Selection {
    /// Greeting first, then the general links in draw order
    pub fn into_audio_files(self) -> Vec<String> {
        std::iter::once(self.greeting_url)
            .chain(self.general_urls)
            .collect()
    }
}

pub struct SelectionService {
    catalog: Arc<dyn CatalogRepository>,
    assets: Arc<dyn AssetServiceApi>,
}

impl SelectionService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, assets: Arc<dyn AssetServiceApi>) -> Self {
        Self { catalog, assets }
    }

    /// A supplied voice must exist and speak the name's language with the name's gender
    async fn check_voice(&self, voice_id: i64, name: &Name) -> Result<(), SelectionServiceError> {
        let voice = self
            .catalog
            .find_voice(voice_id)
            .await?
            .ok_or(SelectionServiceError::VoiceNotFound)?;

        if voice.gender != name.gender || voice.language_id != name.language_id {
            tracing::warn!(
                voice_id = voice.id,
                name_id = name.id,
                voice_gender = %voice.gender,
                name_gender = %name.gender,
                "Selected voice does not match name"
            );
            return Err(SelectionServiceError::VoiceMismatch);
        }

        Ok(())
    }
}

#[async_trait]
pub trait SelectionServiceApi: Send + Sync {
    /// Resolve the greeting link of a name plus up to five random general
    /// message links for the selected theme.
    ///
    /// Nothing is signed unless the name, its greeting and the greeting audio
    /// all exist. General messages without audio are never sampled.
    async fn resolve(&self, request: SelectionRequest) -> Result<Selection, SelectionServiceError>;
}

#[async_trait]
impl SelectionServiceApi for SelectionService {
    async fn resolve(&self, request: SelectionRequest) -> Result<Selection, SelectionServiceError> {
        let name_id = request
            .name_id
            .ok_or(SelectionServiceError::NameNotFound)?;

        let name = self
            .catalog
            .find_name(name_id)
            .await?
            .ok_or(SelectionServiceError::NameNotFound)?;

        if let Some(voice_id) = request.voice_id {
            self.check_voice(voice_id, &name).await?;
        }

        let greeting = self
            .catalog
            .find_greeting(name.id)
            .await?
            .ok_or(SelectionServiceError::GreetingNotFound)?;

        let greeting_key = greeting
            .audio_key()
            .ok_or(SelectionServiceError::GreetingAudioNotFound)?;

        let greeting_url = self.assets.link_for(greeting_key).await?;

        let candidates = match request.topic.as_deref() {
            Some(topic) if !topic.is_empty() => {
                self.catalog
                    .find_general_candidates(topic, name.gender, name.language_id)
                    .await?
            }
            _ => Vec::new(),
        };

        let candidate_count = candidates.len();
        let playable: Vec<String> = candidates
            .iter()
            .filter_map(|g| g.audio_key().map(str::to_string))
            .collect();
        let playable_count = playable.len();

        let sampled = sample_general(playable);

        let mut general_urls = Vec::with_capacity(sampled.len());
        for key in &sampled {
            general_urls.push(self.assets.link_for(key).await?);
        }

        tracing::info!(
            name_id = name.id,
            topic = request.topic.as_deref().unwrap_or(""),
            language = request.language_code.as_deref().unwrap_or(""),
            candidate_count,
            playable_count,
            sampled_count = general_urls.len(),
            "Selection resolved"
        );

        Ok(Selection {
            greeting_url,
            general_urls,
        })
    }
}
