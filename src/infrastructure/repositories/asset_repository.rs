use async_trait::async_trait;
use std::time::Duration;

/// Repository for durable audio object storage.
/// Abstracts the underlying object store (AWS S3 or a compatible service).
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Write `bytes` under `key`, replacing nothing: callers always pass fresh keys
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), String>;

    /// Sign a time-limited GET link for `key`.
    ///
    /// The link is signed without checking that the object exists.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, String>;
}
