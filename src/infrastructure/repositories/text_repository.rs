use async_trait::async_trait;

/// Repository for free-form text generation (chat completion style providers)
#[async_trait]
pub trait TextGenerationRepository: Send + Sync {
    /// Send a single user prompt and return the trimmed answer
    async fn complete(&self, prompt: &str) -> Result<String, String>;
}
