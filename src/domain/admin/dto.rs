use super::error::AdminServiceError;
use crate::domain::catalog::{CatalogSnapshot, Gender};
use serde::{Deserialize, Serialize};

/// Body of POST/PUT /admin/languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInput {
    pub name: String,
    pub code: String,
}

/// Body of POST/PUT /admin/voices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInput {
    pub name: String,
    #[serde(alias = "elevenlabs_voice_id")]
    pub external_voice_id: String,
    pub gender: Gender,
    pub language_id: i64,
}

/// Body of POST/PUT /admin/names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameInput {
    pub name: String,
    pub gender: Gender,
    pub language_id: i64,
}

/// Body of POST/PUT /admin/categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub language_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageDeletion {
    /// Voices, names and categories left pointing at the deleted language
    pub orphaned_references: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub languages: usize,
    pub voices: usize,
    pub names: usize,
    pub categories: usize,
    pub personal: usize,
    pub general: usize,
}

impl From<&CatalogSnapshot> for SnapshotSummary {
    fn from(snapshot: &CatalogSnapshot) -> Self {
        Self {
            languages: snapshot.languages.len(),
            voices: snapshot.voices.len(),
            names: snapshot.names.len(),
            categories: snapshot.categories.len(),
            personal: snapshot.personal.len(),
            general: snapshot.general.len(),
        }
    }
}

fn required(value: &str, field: &str) -> Result<String, AdminServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AdminServiceError::Invalid(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

impl LanguageInput {
    /// Trimmed copy; codes are stored lower case ("ES" and "es" are one language)
    pub fn normalized(&self) -> Result<Self, AdminServiceError> {
        Ok(Self {
            name: required(&self.name, "name")?,
            code: required(&self.code, "code")?.to_lowercase(),
        })
    }
}

impl VoiceInput {
    pub fn normalized(&self) -> Result<Self, AdminServiceError> {
        Ok(Self {
            name: required(&self.name, "name")?,
            external_voice_id: required(&self.external_voice_id, "external_voice_id")?,
            gender: self.gender,
            language_id: self.language_id,
        })
    }
}

impl NameInput {
    pub fn normalized(&self) -> Result<Self, AdminServiceError> {
        Ok(Self {
            name: required(&self.name, "name")?,
            gender: self.gender,
            language_id: self.language_id,
        })
    }
}

impl CategoryInput {
    pub fn normalized(&self) -> Result<Self, AdminServiceError> {
        Ok(Self {
            name: required(&self.name, "name")?,
            language_id: self.language_id,
        })
    }
}
