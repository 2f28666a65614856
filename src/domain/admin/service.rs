use super::dto::{
    CategoryInput, LanguageDeletion, LanguageInput, NameInput, SnapshotSummary, VoiceInput,
};
use super::error::AdminServiceError;
use crate::domain::catalog::{CatalogRepository, CatalogSnapshot, Category, Language, Name, Voice};
use crate::infrastructure::repositories::{PgCatalogRepository, SnapshotCatalogRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Record management over the live catalog store
pub struct AdminService {
    catalog_repo: Arc<PgCatalogRepository>,
    snapshot_repo: Option<Arc<SnapshotCatalogRepository>>,
}

impl AdminService {
    /// `snapshot_repo` is set when public reads are served from a snapshot
    pub fn new(
        catalog_repo: Arc<PgCatalogRepository>,
        snapshot_repo: Option<Arc<SnapshotCatalogRepository>>,
    ) -> Self {
        Self {
            catalog_repo,
            snapshot_repo,
        }
    }

    async fn ensure_language(&self, language_id: i64) -> Result<(), AdminServiceError> {
        match self.catalog_repo.find_language(language_id).await? {
            Some(_) => Ok(()),
            None => Err(AdminServiceError::Invalid(format!(
                "Language {} does not exist",
                language_id
            ))),
        }
    }
}

fn not_found(what: &str) -> AdminServiceError {
    AdminServiceError::NotFound(format!("{} not found", what))
}

#[async_trait]
pub trait AdminServiceApi: Send + Sync {
    async fn list_languages(&self) -> Result<Vec<Language>, AdminServiceError>;
    async fn create_language(&self, input: LanguageInput) -> Result<Language, AdminServiceError>;
    async fn update_language(&self, id: i64, input: LanguageInput)
        -> Result<Language, AdminServiceError>;
    /// Deletion is never blocked by references; they are reported instead
    async fn delete_language(&self, id: i64) -> Result<LanguageDeletion, AdminServiceError>;

    async fn list_voices(&self) -> Result<Vec<Voice>, AdminServiceError>;
    async fn create_voice(&self, input: VoiceInput) -> Result<Voice, AdminServiceError>;
    async fn update_voice(&self, id: i64, input: VoiceInput) -> Result<Voice, AdminServiceError>;
    async fn delete_voice(&self, id: i64) -> Result<(), AdminServiceError>;

    async fn list_names(&self) -> Result<Vec<Name>, AdminServiceError>;
    async fn create_name(&self, input: NameInput) -> Result<Name, AdminServiceError>;
    async fn update_name(&self, id: i64, input: NameInput) -> Result<Name, AdminServiceError>;
    async fn delete_name(&self, id: i64) -> Result<(), AdminServiceError>;

    async fn list_categories(&self) -> Result<Vec<Category>, AdminServiceError>;
    async fn create_category(&self, input: CategoryInput) -> Result<Category, AdminServiceError>;
    async fn update_category(&self, id: i64, input: CategoryInput)
        -> Result<Category, AdminServiceError>;
    async fn delete_category(&self, id: i64) -> Result<(), AdminServiceError>;

    /// Export of the live store
    async fn export_snapshot(&self) -> Result<CatalogSnapshot, AdminServiceError>;

    /// Re-export the live store into the in-memory snapshot serving public reads
    async fn refresh_snapshot(&self) -> Result<SnapshotSummary, AdminServiceError>;
}

#[async_trait]
impl AdminServiceApi for AdminService {
    async fn list_languages(&self) -> Result<Vec<Language>, AdminServiceError> {
        Ok(self.catalog_repo.list_languages().await?)
    }

    async fn create_language(&self, input: LanguageInput) -> Result<Language, AdminServiceError> {
        let input = input.normalized()?;
        let language = self.catalog_repo.create_language(&input).await?;
        tracing::info!(language_id = language.id, code = %language.code, "Language created");
        Ok(language)
    }

    async fn update_language(
        &self,
        id: i64,
        input: LanguageInput,
    ) -> Result<Language, AdminServiceError> {
        let input = input.normalized()?;
        self.catalog_repo
            .update_language(id, &input)
            .await?
            .ok_or_else(|| not_found("Language"))
    }

    async fn delete_language(&self, id: i64) -> Result<LanguageDeletion, AdminServiceError> {
        let orphaned_references = self.catalog_repo.count_language_references(id).await?;

        if !self.catalog_repo.delete_language(id).await? {
            return Err(not_found("Language"));
        }

        if orphaned_references > 0 {
            tracing::warn!(
                language_id = id,
                orphaned_references,
                "Deleted language is still referenced"
            );
        }

        Ok(LanguageDeletion {
            orphaned_references,
        })
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, AdminServiceError> {
        Ok(self.catalog_repo.list_voices().await?)
    }

    async fn create_voice(&self, input: VoiceInput) -> Result<Voice, AdminServiceError> {
        let input = input.normalized()?;
        self.ensure_language(input.language_id).await?;
        let voice = self.catalog_repo.create_voice(&input).await?;
        tracing::info!(voice_id = voice.id, "Voice created");
        Ok(voice)
    }

    async fn update_voice(&self, id: i64, input: VoiceInput) -> Result<Voice, AdminServiceError> {
        let input = input.normalized()?;
        self.ensure_language(input.language_id).await?;
        self.catalog_repo
            .update_voice(id, &input)
            .await?
            .ok_or_else(|| not_found("Voice"))
    }

    async fn delete_voice(&self, id: i64) -> Result<(), AdminServiceError> {
        if !self.catalog_repo.delete_voice(id).await? {
            return Err(not_found("Voice"));
        }
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<Name>, AdminServiceError> {
        Ok(self.catalog_repo.list_names().await?)
    }

    async fn create_name(&self, input: NameInput) -> Result<Name, AdminServiceError> {
        let input = input.normalized()?;
        self.ensure_language(input.language_id).await?;
        let name = self.catalog_repo.create_name(&input).await?;
        tracing::info!(name_id = name.id, "Name created");
        Ok(name)
    }

    async fn update_name(&self, id: i64, input: NameInput) -> Result<Name, AdminServiceError> {
        let input = input.normalized()?;
        self.ensure_language(input.language_id).await?;
        self.catalog_repo
            .update_name(id, &input)
            .await?
            .ok_or_else(|| not_found("Name"))
    }

    async fn delete_name(&self, id: i64) -> Result<(), AdminServiceError> {
        if !self.catalog_repo.delete_name(id).await? {
            return Err(not_found("Name"));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AdminServiceError> {
        Ok(self.catalog_repo.list_categories().await?)
    }

    async fn create_category(&self, input: CategoryInput) -> Result<Category, AdminServiceError> {
        let input = input.normalized()?;
        self.ensure_language(input.language_id).await?;
        let category = self.catalog_repo.create_category(&input).await?;
        tracing::info!(category_id = category.id, "Category created");
        Ok(category)
    }

    async fn update_category(
        &self,
        id: i64,
        input: CategoryInput,
    ) -> Result<Category, AdminServiceError> {
        let input = input.normalized()?;
        self.ensure_language(input.language_id).await?;
        self.catalog_repo
            .update_category(id, &input)
            .await?
            .ok_or_else(|| not_found("Category"))
    }

    async fn delete_category(&self, id: i64) -> Result<(), AdminServiceError> {
        if !self.catalog_repo.delete_category(id).await? {
            return Err(not_found("Category"));
        }
        Ok(())
    }

    async fn export_snapshot(&self) -> Result<CatalogSnapshot, AdminServiceError> {
        Ok(self.catalog_repo.export_snapshot().await?)
    }

    async fn refresh_snapshot(&self) -> Result<SnapshotSummary, AdminServiceError> {
        let snapshot_repo = self.snapshot_repo.as_ref().ok_or_else(|| {
            AdminServiceError::Invalid("Catalog is not served from a snapshot".to_string())
        })?;

        let snapshot = self.catalog_repo.export_snapshot().await?;
        let summary = SnapshotSummary::from(&snapshot);
        snapshot_repo.replace(snapshot);

        tracing::info!(
            names = summary.names,
            general_messages = summary.general,
            "Catalog snapshot refreshed"
        );

        Ok(summary)
    }
}
