use super::asset_repository::AssetRepository;
use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, primitives::ByteStream, Client as S3Client};
use std::sync::Arc;
use std::time::Duration;

/// AWS S3 implementation of the asset repository
pub struct S3AssetRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3AssetRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String) -> Self {
        Self { s3_client, bucket }
    }
}

#[async_trait]
impl AssetRepository for S3AssetRepository {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        let start_time = std::time::Instant::now();
        let size = bytes.len();

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    bucket = %self.bucket,
                    key = key,
                    "S3 put_object failed"
                );
                format!("S3 upload error: {}", e)
            })?;

        tracing::info!(
            provider = "s3",
            bucket = %self.bucket,
            key = key,
            audio_size_bytes = size,
            latency_ms = start_time.elapsed().as_millis(),
            "Audio object uploaded"
        );

        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| format!("Invalid presigning config: {}", e))?;

        let request = self
            .s3_client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, key = key, "S3 presigning failed");
                format!("S3 presigning error: {}", e)
            })?;

        Ok(request.uri().to_string())
    }
}
