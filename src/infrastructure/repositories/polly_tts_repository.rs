use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?]+\s+)").expect("sentence pattern is valid"));

static SSML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(break|prosody|emphasis|amazon:effect)\b").expect("ssml pattern is valid"));

/// Voices that support the neural engine (AWS Polly documentation)
const NEURAL_VOICES: &[&str] = &[
    // English
    "Joanna", "Matthew", "Ivy", "Kendra", "Kimberly", "Salli", "Joey", "Justin", "Kevin",
    // Spanish
    "Lupe", "Pedro", "Sergio", "Lucia", // French
    "Lea", "Remi", // German
    "Vicki", "Daniel", // Italian
    "Bianca", "Adriano", // Portuguese
    "Ines", "Camila", "Vitoria", "Thiago",
];

/// AWS Polly implementation of TTS repository.
///
/// Catalog voices store the Polly voice name (e.g. "Lucia") as their external id.
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    fn engine_for_voice(voice: &str) -> Engine {
        if NEURAL_VOICES.contains(&voice) {
            Engine::Neural
        } else {
            Engine::Standard
        }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, voice_name: &str) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice_name);
        let engine = Self::engine_for_voice(voice_name);
        let (text_type, payload) = polly_payload(text);

        tracing::info!(
            voice = voice_name,
            engine = ?engine,
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(payload)
            .text_type(text_type)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice = voice_name,
                    engine = ?engine,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

/// Generated messages carry pauses as SSML tags; Polly only honours them in SSML mode
fn polly_payload(text: &str) -> (TextType, String) {
    if SSML_TAG.is_match(text) {
        (TextType::Ssml, format!("<speak>{}</speak>", text.replace('&', "&amp;")))
    } else {
        (TextType::Text, text.to_string())
    }
}

/// Split text into batches that respect sentence boundaries.
/// Each batch is at most MAX_BATCH_SIZE bytes.
fn split_into_batches(text: &str) -> Vec<String> {
    if text.len() <= MAX_BATCH_SIZE {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();
    let mut last_end = 0;

    for mat in SENTENCE_END.find_iter(text) {
        let sentence = &text[last_end..mat.end()];

        if !current_batch.is_empty() && current_batch.len() + sentence.len() > MAX_BATCH_SIZE {
            batches.push(current_batch.trim().to_string());
            current_batch = String::new();
        }

        current_batch.push_str(sentence);
        last_end = mat.end();
    }

    if last_end < text.len() {
        let remaining = &text[last_end..];

        if !current_batch.is_empty() && current_batch.len() + remaining.len() > MAX_BATCH_SIZE {
            batches.push(current_batch.trim().to_string());
            current_batch = String::new();
        }

        if remaining.len() > MAX_BATCH_SIZE {
            // No sentence boundary left: cut on char boundaries
            let mut chunk = String::new();
            for c in remaining.chars() {
                if chunk.len() + c.len_utf8() > MAX_BATCH_SIZE {
                    batches.push(std::mem::take(&mut chunk));
                }
                chunk.push(c);
            }
            if !chunk.is_empty() {
                batches.push(chunk);
            }
        } else {
            current_batch.push_str(remaining);
        }
    }

    if !current_batch.is_empty() {
        batches.push(current_batch.trim().to_string());
    }

    batches
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text);
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_polly(batch, voice_id).await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        tracing::info!(
            provider = "polly",
            voice = voice_id,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
