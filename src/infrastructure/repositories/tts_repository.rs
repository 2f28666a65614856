use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (ElevenLabs, AWS Polly, etc.)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Mapping the catalog's external voice id onto the provider's voice selection
/// - Returning a single MP3 stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text with the given provider voice
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `voice_id` - Provider voice identity stored on the catalog voice
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, String>;
}
