pub mod asset_repository;
pub mod catalog_repository;
pub mod elevenlabs_tts_repository;
pub mod openai_text_repository;
pub mod polly_tts_repository;
pub mod s3_asset_repository;
pub mod snapshot_repository;
pub mod text_repository;
pub mod tts_repository;


pub use asset_repository::AssetRepository;
pub use catalog_repository::PgCatalogRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use openai_text_repository::OpenAiTextRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use s3_asset_repository::S3AssetRepository;
pub use snapshot_repository::{read_snapshot_file, write_snapshot_file, SnapshotCatalogRepository};
pub use text_repository::TextGenerationRepository;
pub use tts_repository::TtsRepository;
