use super::text_repository::TextGenerationRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat completion implementation of the text generation repository
pub struct OpenAiTextRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTextRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl TextGenerationRepository for OpenAiTextRepository {
    async fn complete(&self, prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("Invalid OpenAI message: {}", e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([message.into()])
            .build()
            .map_err(|e| format!("Invalid OpenAI request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                prompt_length = prompt.len(),
                "OpenAI chat completion failed"
            );
            format!("OpenAI error: {}", e)
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| "OpenAI returned an empty completion".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            prompt_length = prompt.len(),
            completion_length = content.len(),
            "Text generation completed"
        );

        Ok(content)
    }
}
