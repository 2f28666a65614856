use super::dto::{CatalogOptions, LanguageOption, NameOption, TopicOption, VoiceOption};
use super::error::OptionsServiceError;
use super::flags::language_flag;
use crate::domain::catalog::{CatalogRepository, Gender, Language, Name, Voice};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

pub struct OptionsService {
    catalog: Arc<dyn CatalogRepository>,
}

impl OptionsService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
pub trait OptionsServiceApi: Send + Sync {
    /// Whole catalog projected for selection lists
    async fn get_options(&self) -> Result<CatalogOptions, OptionsServiceError>;
}

#[async_trait]
impl OptionsServiceApi for OptionsService {
    async fn get_options(&self) -> Result<CatalogOptions, OptionsServiceError> {
        let voices = self.catalog.list_voices().await?;
        let languages = self.catalog.list_languages().await?;
        let names = self.catalog.list_names().await?;
        let themes = self.catalog.list_theme_names().await?;

        let options = CatalogOptions {
            voice_options: voices.iter().map(voice_option).collect(),
            language_options: languages.iter().map(language_option).collect(),
            name_options: names.iter().map(name_option).collect(),
            topic_options: topic_options(themes),
        };

        tracing::debug!(
            voices = options.voice_options.len(),
            languages = options.language_options.len(),
            names = options.name_options.len(),
            topics = options.topic_options.len(),
            "Options built"
        );

        Ok(options)
    }
}

fn gender_flag(gender: Gender) -> u8 {
    match gender {
        Gender::Female => 1,
        Gender::Male => 0,
    }
}

fn voice_option(voice: &Voice) -> VoiceOption {
    let icon = match voice.gender {
        Gender::Female => "👩",
        Gender::Male => "👨",
    };
    VoiceOption {
        text: format!("{} {}", icon, voice.name),
        value: voice.id.to_string(),
        gender: gender_flag(voice.gender),
    }
}

fn language_option(language: &Language) -> LanguageOption {
    let text = match language_flag(&language.code) {
        "" => language.name.clone(),
        flag => format!("{} {}", flag, language.name),
    };
    LanguageOption {
        text,
        value: language.code.clone(),
        id: language.id.to_string(),
    }
}

fn name_option(name: &Name) -> NameOption {
    NameOption {
        text: name.name.clone(),
        value: name.id.to_string(),
        gender: gender_flag(name.gender),
        language_id: name.language_id.to_string(),
    }
}

/// One entry per distinct theme, in first-seen order
fn topic_options(themes: Vec<String>) -> Vec<TopicOption> {
    let mut seen = HashSet::new();
    themes
        .into_iter()
        .filter(|theme| seen.insert(theme.clone()))
        .map(|theme| TopicOption {
            text: theme.clone(),
            value: theme,
        })
        .collect()
}
