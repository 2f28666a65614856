use serde::{Deserialize, Serialize};

/// Response for GET /options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOptions {
    pub voice_options: Vec<VoiceOption>,
    pub language_options: Vec<LanguageOption>,
    pub name_options: Vec<NameOption>,
    pub topic_options: Vec<TopicOption>,
}

/// `gender` is 1 for female and 0 for male
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceOption {
    pub text: String,
    pub value: String,
    pub gender: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageOption {
    pub text: String,
    /// Language code
    pub value: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameOption {
    pub text: String,
    pub value: String,
    pub gender: u8,
    pub language_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TopicOption {
    pub text: String,
    pub value: String,
}
