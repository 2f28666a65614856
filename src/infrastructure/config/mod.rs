use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Longest lifetime S3 accepts for a presigned link (7 days)
const MAX_LINK_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Admin authentication
    pub admin_jwt_secret: String,
    pub admin_jwt_expiration_hours: i64,
    // Text generation
    pub openai_api_key: String,
    pub openai_model: String,
    // Speech synthesis
    pub tts_provider: TtsProvider,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_model_id: String,
    // Object storage
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_region: String,
    pub s3_bucket_name: String,
    pub link_ttl_secs: u64,
    pub link_cache_enabled: bool,
    pub external_call_timeout_secs: u64,
    // Catalog source for public reads
    pub catalog_source: CatalogSource,
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    ElevenLabs,
    Polly,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Live,
    Snapshot,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| format!("Missing environment variable {}", key))
        };
        let or_default = |key: &str, default: &str| {
            optional(key).unwrap_or_else(|| default.to_string())
        };
        let flag = |key: &str| or_default(key, "false").to_lowercase() == "true";

        let tts_provider = match or_default("TTS_PROVIDER", "elevenlabs").to_lowercase().as_str() {
            "polly" => TtsProvider::Polly,
            "elevenlabs" => TtsProvider::ElevenLabs,
            other => return Err(format!("Unknown TTS_PROVIDER {}", other).into()),
        };
        let elevenlabs_api_key = optional("ELEVENLABS_API_KEY");
        if tts_provider == TtsProvider::ElevenLabs && elevenlabs_api_key.is_none() {
            return Err("Missing environment variable ELEVENLABS_API_KEY".into());
        }

        let catalog_source = match or_default("CATALOG_SOURCE", "live").to_lowercase().as_str() {
            "snapshot" => CatalogSource::Snapshot,
            "live" => CatalogSource::Live,
            other => return Err(format!("Unknown CATALOG_SOURCE {}", other).into()),
        };

        let environment = match or_default("ENVIRONMENT", "development").as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        // Production logs default to JSON for the log shipper
        let log_format = match optional("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Pretty,
            None if environment == Environment::Production => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        let link_ttl_secs: u64 = or_default("LINK_TTL_SECS", "3600").parse()?;
        if link_ttl_secs == 0 || link_ttl_secs > MAX_LINK_TTL_SECS {
            return Err(format!(
                "LINK_TTL_SECS must be between 1 and {}, got {}",
                MAX_LINK_TTL_SECS, link_ttl_secs
            )
            .into());
        }

        let config = Config {
            database_url: required("DATABASE_URL")?,
            host: or_default("HOST", "0.0.0.0"),
            port: or_default("PORT", "8080").parse()?,
            environment,
            log_format,
            admin_jwt_secret: required("ADMIN_JWT_SECRET")?,
            admin_jwt_expiration_hours: or_default("ADMIN_JWT_EXPIRATION_HOURS", "12").parse()?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_model: or_default("OPENAI_MODEL", "gpt-4o-mini"),
            tts_provider,
            elevenlabs_api_key,
            elevenlabs_model_id: or_default("ELEVENLABS_MODEL_ID", "eleven_turbo_v2_5"),
            aws_access_key_id: optional("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: optional("AWS_SECRET_ACCESS_KEY"),
            aws_region: optional("AWS_REGION")
                .or_else(|| optional("AWS_REGION_NAME"))
                .unwrap_or_else(|| "eu-west-1".to_string()),
            s3_bucket_name: required("AWS_S3_BUCKET_NAME")?,
            link_ttl_secs,
            link_cache_enabled: flag("LINK_CACHE_ENABLED"),
            external_call_timeout_secs: or_default("EXTERNAL_CALL_TIMEOUT_SECS", "60").parse()?,
            catalog_source,
            snapshot_path: optional("SNAPSHOT_PATH"),
        };

        Ok(config)
    }

    pub fn link_ttl(&self) -> Duration {
        Duration::from_secs(self.link_ttl_secs)
    }

    pub fn external_call_timeout(&self) -> Duration {
        Duration::from_secs(self.external_call_timeout_secs)
    }
}
