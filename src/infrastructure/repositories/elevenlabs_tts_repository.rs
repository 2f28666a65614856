use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use serde::Serialize;

const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";
const OUTPUT_FORMAT: &str = "mp3_22050_32";

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.5,
            use_speaker_boost: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    api_key: String,
    model_id: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl ElevenLabsTtsRepository {
    pub fn new(api_key: String, model_id: String, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            model_id,
            base_url: ELEVENLABS_API_URL.to_string(),
            http_client,
        }
    }

    /// Point the client at a different API host (proxies, local stubs)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!(
            "{}/{}?output_format={}",
            self.base_url.trim_end_matches('/'),
            voice_id,
            OUTPUT_FORMAT
        )
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let request = SpeechRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .http_client
            .post(self.endpoint(voice_id))
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice = voice_id, "ElevenLabs request failed");
                format!("ElevenLabs error: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status,
                voice = voice_id,
                body = %error_text,
                "ElevenLabs synthesis rejected"
            );
            return Err(format!("ElevenLabs error {}: {}", status, error_text));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read ElevenLabs audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "elevenlabs",
            model = %self.model_id,
            voice = voice_id,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
