use super::model::{Category, Gender, GeneralMessage, Language, MessageType, Name, PersonalMessage, Voice};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Denormalized point-in-time export of the whole catalog.
///
/// Every list is kept in ascending id order, matching what the live store returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub voices: Vec<Voice>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub personal: Vec<PersonalMessage>,
    #[serde(default)]
    pub general: Vec<GeneralMessage>,
}

/// Export document as written, before each row is checked
#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    languages: Vec<Value>,
    #[serde(default)]
    voices: Vec<Value>,
    #[serde(default)]
    names: Vec<Value>,
    #[serde(default)]
    categories: Vec<Value>,
    #[serde(default)]
    personal: Vec<Value>,
    #[serde(default)]
    general: Vec<Value>,
}

/// Rows that do not fit the model are dropped with a warning.
///
/// Older exports carry NULL foreign keys and theme names; such rows can never
/// take part in a resolution.
fn lenient_rows<T: DeserializeOwned>(section: &'static str, rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.get("id").cloned().unwrap_or(Value::Null);
            match serde_json::from_value(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(section, id = %id, error = %e, "Skipping snapshot row");
                    None
                }
            }
        })
        .collect()
}

impl CatalogSnapshot {
    /// Parse an export document. Only a malformed document fails; bad rows are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        let mut snapshot = CatalogSnapshot {
            languages: lenient_rows("languages", raw.languages),
            voices: lenient_rows("voices", raw.voices),
            names: lenient_rows("names", raw.names),
            categories: lenient_rows("categories", raw.categories),
            personal: lenient_rows("personal", raw.personal),
            general: lenient_rows("general", raw.general),
        };
        snapshot.sort_by_id();
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Hand-edited exports are not guaranteed to be ordered
    pub fn sort_by_id(&mut self) {
        self.languages.sort_by_key(|l| l.id);
        self.voices.sort_by_key(|v| v.id);
        self.names.sort_by_key(|n| n.id);
        self.categories.sort_by_key(|c| c.id);
        self.personal.sort_by_key(|p| p.id);
        self.general.sort_by_key(|g| g.id);
    }

    pub fn name(&self, name_id: i64) -> Option<&Name> {
        self.names.iter().find(|n| n.id == name_id)
    }

    pub fn voice(&self, voice_id: i64) -> Option<&Voice> {
        self.voices.iter().find(|v| v.id == voice_id)
    }

    pub fn greeting(&self, name_id: i64) -> Option<&PersonalMessage> {
        self.personal
            .iter()
            .filter(|p| p.name_id == name_id && p.message_type == MessageType::Greeting)
            .min_by_key(|p| p.id)
    }

    pub fn general_candidates(
        &self,
        theme_name: &str,
        gender: Gender,
        language_id: i64,
    ) -> Vec<&GeneralMessage> {
        let category_ids: HashSet<i64> = self
            .categories
            .iter()
            .filter(|c| c.language_id == language_id)
            .map(|c| c.id)
            .collect();

        self.general
            .iter()
            .filter(|g| {
                g.theme_name == theme_name
                    && g.gender == gender
                    && category_ids.contains(&g.category_id)
            })
            .collect()
    }

    pub fn theme_names(&self) -> Vec<String> {
        self.general.iter().map(|g| g.theme_name.clone()).collect()
    }
}
