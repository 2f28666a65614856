use super::error::AssetServiceError;
use crate::infrastructure::repositories::AssetRepository;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const AUDIO_EXTENSION: &str = "mp3";
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Publishes synthesized audio to object storage and issues retrieval links
pub struct AssetService {
    asset_repo: Arc<dyn AssetRepository>,
    link_ttl: Duration,
    call_timeout: Duration,
    link_cache: Option<Cache<String, String>>,
}

impl AssetService {
    pub fn new(
        asset_repo: Arc<dyn AssetRepository>,
        link_ttl: Duration,
        call_timeout: Duration,
        link_cache_enabled: bool,
    ) -> Self {
        // A cached link always keeps at least half of its lifetime
        let link_cache = if link_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(10_000)
                    .time_to_live(link_ttl / 2)
                    .build(),
            )
        } else {
            None
        };

        Self {
            asset_repo,
            link_ttl,
            call_timeout,
            link_cache,
        }
    }

    pub fn link_ttl(&self) -> Duration {
        self.link_ttl
    }
}

#[async_trait]
pub trait AssetServiceApi: Send + Sync {
    /// Upload audio under a freshly generated key and return that key
    async fn publish(&self, audio: Vec<u8>) -> Result<String, AssetServiceError>;

    /// Time-limited public link for an existing object key
    async fn link_for(&self, object_key: &str) -> Result<String, AssetServiceError>;
}

#[async_trait]
impl AssetServiceApi for AssetService {
    async fn publish(&self, audio: Vec<u8>) -> Result<String, AssetServiceError> {
        let object_key = format!("{}.{}", Uuid::new_v4(), AUDIO_EXTENSION);

        tokio::time::timeout(
            self.call_timeout,
            self.asset_repo
                .put_object(&object_key, audio, AUDIO_CONTENT_TYPE),
        )
        .await
        .map_err(|_| AssetServiceError::Unavailable("Audio upload timed out".to_string()))?
        .map_err(AssetServiceError::Unavailable)?;

        Ok(object_key)
    }

    async fn link_for(&self, object_key: &str) -> Result<String, AssetServiceError> {
        let object_key = object_key.trim();
        if object_key.is_empty() {
            return Err(AssetServiceError::InvalidKey(
                "Object key cannot be empty".to_string(),
            ));
        }

        if let Some(cache) = &self.link_cache {
            if let Some(link) = cache.get(object_key).await {
                tracing::debug!(key = object_key, "Link cache hit");
                return Ok(link);
            }
        }

        let link = tokio::time::timeout(
            self.call_timeout,
            self.asset_repo.presign_get(object_key, self.link_ttl),
        )
        .await
        .map_err(|_| AssetServiceError::Unavailable("Link signing timed out".to_string()))?
        .map_err(AssetServiceError::Unavailable)?;

        if let Some(cache) = &self.link_cache {
            cache.insert(object_key.to_string(), link.clone()).await;
        }

        Ok(link)
    }
}
