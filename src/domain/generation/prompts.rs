use crate::domain::catalog::{Gender, MessageType};
use serde::Deserialize;

/// Character limit asked of every generated text
pub const TEXT_CHAR_LIMIT: usize = 100;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratedThemes {
    pub themes: Vec<GeneratedTheme>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratedTheme {
    pub theme_name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

pub fn themes_prompt(
    category_name: &str,
    description: &str,
    theme_count: u32,
    topics_per_theme: u32,
    language_code: &str,
) -> String {
    let language = language_code.to_uppercase();
    format!(
        r#"You are a highly skilled assistant helping to create a motivational and supportive experience for users. Based on the following description, generate {theme_count} distinct themes, each with {topics_per_theme} topics, suited to the given category and context.

Respond with JSON only, in this format:
{{
    "themes": [
        {{
            "theme_name": "Theme 1",
            "topics": ["Topic 1", "Topic 2"]
        }}
    ]
}}
The themes and topics must be written in the {language} language.

Keep in mind the sensitive nature of the category and the user's emotional state. The themes and topics must provide the kind of support or motivation the category calls for.

Category: "{category_name}"
Language: "{language}"
Description: "{description}"

Now generate {theme_count} unique themes, each with {topics_per_theme} motivating or supportive topics that align with the category."#
    )
}

pub fn general_text_prompt(
    language_name: &str,
    theme_name: &str,
    topic_name: &str,
    gender: Gender,
) -> String {
    format!(
        r#"Create an affectionate, motivational text in the {language_name} language.
Theme: "{theme_name}"
Topic: "{topic_name}"
The text should be filled with affirmations, praise, encouragement, affectionate words and motivation.
Use affectionate terms like 'kitten' or 'sunshine' and address the listener with affectionate words appropriate for a {gender} listener.
The text must not exceed {TEXT_CHAR_LIMIT} characters."#
    )
}

pub fn personal_prompt(name: &str, message_type: MessageType, language_name: &str) -> String {
    let instruction = match message_type {
        MessageType::Greeting => "Create a personalized greeting.",
        MessageType::Morning => "Generate an inspiring morning message.",
        MessageType::Day => "Write a positive affirmation for the day.",
        MessageType::Evening => "Compose a relaxing evening message.",
        MessageType::Night => "Craft a thoughtful night message.",
    };

    format!(
        r#"Write a relaxed, slow-paced and affectionate message in {language_name} for someone named {name}.
The message will be converted to speech and played in a whisper.
Add natural pauses with speech synthesis markup where appropriate (e.g. <break time="1.0s" />).
Keep it free-form and friendly and use the name in the text, in its diminutive form when possible.
The message must be in the {language_name} language and contain no more than {TEXT_CHAR_LIMIT} characters.
{instruction}"#
    )
}

/// Chat models often wrap JSON answers in a Markdown fence
pub fn strip_code_fence(answer: &str) -> &str {
    let trimmed = answer.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

pub fn parse_themes(answer: &str) -> Result<GeneratedThemes, serde_json::Error> {
    serde_json::from_str(strip_code_fence(answer))
}
