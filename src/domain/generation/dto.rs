use crate::domain::catalog::{Gender, MessageType};
use serde::{Deserialize, Serialize};

/// Request for POST /admin/categories/:id/themes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateThemesRequest {
    #[serde(default)]
    pub description: String,
    pub theme_count: u32,
    pub topics_per_theme: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeGenerationResult {
    pub inserted: usize,
    /// Theme/topic pairs that already existed for the category and gender
    pub skipped: usize,
}

/// Request for POST /admin/names/:id/messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePersonalRequest {
    #[serde(rename = "type", default = "default_message_type")]
    pub message_type: MessageType,
}

fn default_message_type() -> MessageType {
    MessageType::Greeting
}
