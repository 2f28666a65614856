use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of a personal message attached to a name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Greeting,
    Morning,
    Day,
    Evening,
    Night,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Greeting => "greeting",
            MessageType::Morning => "morning",
            MessageType::Day => "day",
            MessageType::Evening => "evening",
            MessageType::Night => "night",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Language {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Voice {
    pub id: i64,
    pub name: String,
    /// Voice identity understood by the speech synthesis provider
    #[serde(alias = "elevenlabs_voice_id")]
    pub external_voice_id: String,
    pub gender: Gender,
    pub language_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Name {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub language_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub language_id: i64,
}

/// Personal content generated for a single name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct PersonalMessage {
    pub id: i64,
    pub name_id: i64,
    pub text: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub message_type: MessageType,
    pub audio_file: Option<String>,
}

/// Theme/topic scoped content shared by every name of the category's language and gender
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GeneralMessage {
    pub id: i64,
    pub category_id: i64,
    pub theme_name: String,
    pub topic_name: String,
    pub text: Option<String>,
    pub audio_file: Option<String>,
    pub symbols: Option<i32>,
    pub gender: Gender,
}

/// Object key of a stored audio file, if synthesis has completed
pub fn audio_key(audio_file: &Option<String>) -> Option<&str> {
    audio_file
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

impl PersonalMessage {
    pub fn audio_key(&self) -> Option<&str> {
        audio_key(&self.audio_file)
    }
}

impl GeneralMessage {
    pub fn audio_key(&self) -> Option<&str> {
        audio_key(&self.audio_file)
    }
}
