//! Export the live catalog store to a snapshot file.
//!
//! Usage: `export-snapshot [path]` (defaults to `data.json`). Only `DATABASE_URL` is read.

use anyhow::Context;
use greeting_catalog::infrastructure::db::create_pool;
use greeting_catalog::infrastructure::repositories::{write_snapshot_file, PgCatalogRepository};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_catalog=info".into()),
        )
        .init();

    let path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "data.json".to_string()),
    );

    let database_url =
        std::env::var("DATABASE_URL").context("Missing environment variable DATABASE_URL")?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to the catalog database")?;

    let catalog_repo = PgCatalogRepository::new(Arc::new(pool));
    let snapshot = catalog_repo.export_snapshot().await?;
    write_snapshot_file(&path, &snapshot).await?;

    tracing::info!(
        path = %path.display(),
        languages = snapshot.languages.len(),
        voices = snapshot.voices.len(),
        names = snapshot.names.len(),
        categories = snapshot.categories.len(),
        personal_messages = snapshot.personal.len(),
        general_messages = snapshot.general.len(),
        "Catalog snapshot exported"
    );

    Ok(())
}
