use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use aws_sdk_s3::config::Credentials;
use greeting_catalog::controllers::{
    admin::AdminController, catalog::CatalogController, generation::GenerationController,
};
use greeting_catalog::domain::admin::AdminService;
use greeting_catalog::domain::assets::AssetService;
use greeting_catalog::domain::auth::JwtManager;
use greeting_catalog::domain::catalog::CatalogRepository;
use greeting_catalog::domain::generation::GenerationService;
use greeting_catalog::domain::options::OptionsService;
use greeting_catalog::domain::selection::SelectionService;
use greeting_catalog::infrastructure::config::{CatalogSource, Config, LogFormat, TtsProvider};
use greeting_catalog::infrastructure::db::{check_connection, create_pool, run_migrations};
use greeting_catalog::infrastructure::http::{build_router, start_http_server};
use greeting_catalog::infrastructure::repositories::{
    ElevenLabsTtsRepository, OpenAiTextRepository, PgCatalogRepository, PollyTtsRepository,
    S3AssetRepository, SnapshotCatalogRepository, TtsRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Greeting Catalog on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // AWS clients (S3 for audio assets, Polly when selected as TTS provider)
    tracing::info!("Initializing AWS clients with region: {}", config.aws_region);

    let mut aws_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()));

    match (&config.aws_access_key_id, &config.aws_secret_access_key) {
        (Some(access_key), Some(secret_key)) => {
            aws_loader = aws_loader.credentials_provider(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "environment",
            ));
        }
        _ => {
            tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
        }
    }

    let aws_config = aws_loader.load().await;
    tracing::info!(region = ?aws_config.region(), "AWS configuration loaded");

    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let pg_catalog_repo = Arc::new(PgCatalogRepository::new(pool.clone()));
    let asset_repo = Arc::new(S3AssetRepository::new(
        s3_client,
        config.s3_bucket_name.clone(),
    ));

    let openai_client = Arc::new(OpenAIClient::with_config(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));
    let text_repo = Arc::new(OpenAiTextRepository::new(
        openai_client,
        config.openai_model.clone(),
    ));

    let tts_repo: Arc<dyn TtsRepository> = match config.tts_provider {
        TtsProvider::ElevenLabs => {
            let api_key = config
                .elevenlabs_api_key
                .clone()
                .ok_or("Missing environment variable ELEVENLABS_API_KEY")?;
            let http_client = reqwest::Client::builder()
                .timeout(config.external_call_timeout())
                .build()?;
            tracing::info!(model = %config.elevenlabs_model_id, "Using ElevenLabs for speech synthesis");
            Arc::new(ElevenLabsTtsRepository::new(
                api_key,
                config.elevenlabs_model_id.clone(),
                http_client,
            ))
        }
        TtsProvider::Polly => {
            tracing::info!("Using AWS Polly for speech synthesis");
            Arc::new(PollyTtsRepository::new(Arc::new(
                aws_sdk_polly::Client::new(&aws_config),
            )))
        }
    };

    // Public reads come from the live store or from an in-memory snapshot
    let (public_catalog, snapshot_repo): (Arc<dyn CatalogRepository>, _) =
        match config.catalog_source {
            CatalogSource::Live => (pg_catalog_repo.clone() as Arc<dyn CatalogRepository>, None),
            CatalogSource::Snapshot => {
                let snapshot_repo = match &config.snapshot_path {
                    Some(path) => SnapshotCatalogRepository::load(path).await?,
                    None => {
                        tracing::info!("No SNAPSHOT_PATH set, exporting snapshot from the live store");
                        SnapshotCatalogRepository::new(pg_catalog_repo.export_snapshot().await?)
                    }
                };
                let snapshot_repo = Arc::new(snapshot_repo);
                (
                    snapshot_repo.clone() as Arc<dyn CatalogRepository>,
                    Some(snapshot_repo),
                )
            }
        };

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let asset_service = Arc::new(AssetService::new(
        asset_repo,
        config.link_ttl(),
        config.external_call_timeout(),
        config.link_cache_enabled,
    ));
    let options_service = Arc::new(OptionsService::new(public_catalog.clone()));
    let selection_service = Arc::new(SelectionService::new(
        public_catalog,
        asset_service.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(pg_catalog_repo.clone(), snapshot_repo));
    let generation_service = Arc::new(GenerationService::new(
        pg_catalog_repo,
        text_repo,
        tts_repo,
        asset_service,
        config.external_call_timeout(),
    ));
    let jwt_manager = Arc::new(JwtManager::new(
        config.admin_jwt_secret.clone(),
        config.admin_jwt_expiration_hours,
    ));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let catalog_controller = Arc::new(CatalogController::new(options_service, selection_service));
    let admin_controller = Arc::new(AdminController::new(admin_service));
    let generation_controller = Arc::new(GenerationController::new(generation_service));

    let app = build_router(
        pool,
        jwt_manager,
        catalog_controller,
        admin_controller,
        generation_controller,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "greeting_catalog=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
