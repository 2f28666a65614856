use async_trait::async_trait;
use greeting_catalog::infrastructure::repositories::{
    AssetRepository, TextGenerationRepository, TtsRepository,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// Scripted completions, replayed in order.
///
/// When the script runs out every prompt is answered with `Generated text`.
#[derive(Default)]
pub struct FakeTextRepository {
    script: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeTextRepository {
    pub fn push_answer(&self, answer: impl Into<String>) {
        self.script.lock().push_back(Ok(answer.into()));
    }

    pub fn push_failure(&self, error: impl Into<String>) {
        self.script.lock().push_back(Err(error.into()));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerationRepository for FakeTextRepository {
    async fn complete(&self, prompt: &str) -> Result<String, String> {
        self.prompts.lock().push(prompt.to_string());
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok("Generated text".to_string()))
    }
}

/// Synthesizes `mp3:<voice>:<text>`, or fails every call once switched off
#[derive(Default)]
pub struct FakeTtsRepository {
    failing: Mutex<bool>,
    calls: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl FakeTtsRepository {
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    /// (text, voice) pairs in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl TtsRepository for FakeTtsRepository {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, String> {
        if *self.failing.lock() {
            return Err("synthesis provider unavailable".to_string());
        }
        self.calls
            .lock()
            .push((text.to_string(), voice_id.to_string()));
        Ok(format!("mp3:{}:{}", voice_id, text).into_bytes())
    }
}

/// In-memory object store issuing `https://assets.test/<key>` links
#[derive(Default)]
pub struct FakeAssetRepository {
    objects: Mutex<Vec<(String, Vec<u8>)>>,
}

#[allow(dead_code)]
impl FakeAssetRepository {
    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, bytes)| bytes.clone())
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().len()
    }
}

#[async_trait]
impl AssetRepository for FakeAssetRepository {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), String> {
        self.objects.lock().push((key.to_string(), bytes));
        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, String> {
        Ok(format!(
            "https://assets.test/{}?expires={}",
            key,
            expires_in.as_secs()
        ))
    }
}
