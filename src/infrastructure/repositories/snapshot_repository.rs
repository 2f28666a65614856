use crate::domain::catalog::{
    CatalogError, CatalogRepository, CatalogSnapshot, Gender, GeneralMessage, Language, Name,
    PersonalMessage, Voice,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Read-only catalog served from an in-memory snapshot.
///
/// The snapshot is swapped atomically on refresh; readers keep the `Arc` they
/// started with, so a request never observes a half-replaced catalog.
pub struct SnapshotCatalogRepository {
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl SnapshotCatalogRepository {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let snapshot = read_snapshot_file(path.as_ref()).await?;
        Ok(Self::new(snapshot))
    }

    pub fn current(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&*self.snapshot.read())
    }

    pub fn replace(&self, mut snapshot: CatalogSnapshot) {
        snapshot.sort_by_id();
        *self.snapshot.write() = Arc::new(snapshot);
    }
}

pub async fn read_snapshot_file(path: &Path) -> Result<CatalogSnapshot, CatalogError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        CatalogError::Storage(format!("Failed to read snapshot {}: {}", path.display(), e))
    })?;

    let snapshot = CatalogSnapshot::from_json(&json).map_err(|e| {
        CatalogError::Storage(format!("Invalid snapshot {}: {}", path.display(), e))
    })?;

    tracing::info!(
        path = %path.display(),
        names = snapshot.names.len(),
        general_messages = snapshot.general.len(),
        "Catalog snapshot loaded"
    );

    Ok(snapshot)
}

/// Write to a sibling temp file first so a crash never leaves a truncated snapshot
pub async fn write_snapshot_file(path: &Path, snapshot: &CatalogSnapshot) -> Result<(), CatalogError> {
    let json = snapshot
        .to_json()
        .map_err(|e| CatalogError::Storage(format!("Failed to serialize snapshot: {}", e)))?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, json).await.map_err(|e| {
        CatalogError::Storage(format!("Failed to write {}: {}", tmp_path.display(), e))
    })?;
    tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
        CatalogError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[async_trait]
impl CatalogRepository for SnapshotCatalogRepository {
    async fn list_languages(&self) -> Result<Vec<Language>, CatalogError> {
        Ok(self.current().languages.clone())
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, CatalogError> {
        Ok(self.current().voices.clone())
    }

    async fn list_names(&self) -> Result<Vec<Name>, CatalogError> {
        Ok(self.current().names.clone())
    }

    async fn list_theme_names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.current().theme_names())
    }

    async fn find_name(&self, name_id: i64) -> Result<Option<Name>, CatalogError> {
        Ok(self.current().name(name_id).cloned())
    }

    async fn find_voice(&self, voice_id: i64) -> Result<Option<Voice>, CatalogError> {
        Ok(self.current().voice(voice_id).cloned())
    }

    async fn find_greeting(&self, name_id: i64) -> Result<Option<PersonalMessage>, CatalogError> {
        Ok(self.current().greeting(name_id).cloned())
    }

    async fn find_general_candidates(
        &self,
        theme_name: &str,
        gender: Gender,
        language_id: i64,
    ) -> Result<Vec<GeneralMessage>, CatalogError> {
        let snapshot = self.current();
        Ok(snapshot
            .general_candidates(theme_name, gender, language_id)
            .into_iter()
            .cloned()
            .collect())
    }
}
