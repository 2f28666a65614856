use axum::{
    extract::{Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::domain::admin::{
    AdminService, AdminServiceApi, CategoryInput, LanguageInput, NameInput, SnapshotSummary,
    VoiceInput,
};
use crate::domain::catalog::{CatalogSnapshot, Category, Language, Name, Voice};
use crate::error::AppResult;

pub const X_ORPHANED_REFERENCES: HeaderName = HeaderName::from_static("x-orphaned-references");

/// Catalog record management under /admin
pub struct AdminController {
    admin_service: Arc<AdminService>,
}

impl AdminController {
    pub fn new(admin_service: Arc<AdminService>) -> Self {
        Self { admin_service }
    }

    // Languages

    /// GET /admin/languages
    pub async fn list_languages(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Language>>> {
        Ok(Json(controller.admin_service.list_languages().await?))
    }

    /// POST /admin/languages
    pub async fn create_language(
        State(controller): State<Arc<AdminController>>,
        Json(input): Json<LanguageInput>,
    ) -> AppResult<(StatusCode, Json<Language>)> {
        let language = controller.admin_service.create_language(input).await?;
        Ok((StatusCode::CREATED, Json(language)))
    }

    /// PUT /admin/languages/:id
    pub async fn update_language(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
        Json(input): Json<LanguageInput>,
    ) -> AppResult<Json<Language>> {
        Ok(Json(controller.admin_service.update_language(id, input).await?))
    }

    /// DELETE /admin/languages/:id - Reports references left behind
    pub async fn delete_language(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
    ) -> AppResult<Response> {
        let deletion = controller.admin_service.delete_language(id).await?;

        let mut response = StatusCode::NO_CONTENT.into_response();
        response.headers_mut().insert(
            X_ORPHANED_REFERENCES,
            HeaderValue::from(deletion.orphaned_references),
        );
        Ok(response)
    }

    // Voices

    /// GET /admin/voices
    pub async fn list_voices(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Voice>>> {
        Ok(Json(controller.admin_service.list_voices().await?))
    }

    /// POST /admin/voices
    pub async fn create_voice(
        State(controller): State<Arc<AdminController>>,
        Json(input): Json<VoiceInput>,
    ) -> AppResult<(StatusCode, Json<Voice>)> {
        let voice = controller.admin_service.create_voice(input).await?;
        Ok((StatusCode::CREATED, Json(voice)))
    }

    /// PUT /admin/voices/:id
    pub async fn update_voice(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
        Json(input): Json<VoiceInput>,
    ) -> AppResult<Json<Voice>> {
        Ok(Json(controller.admin_service.update_voice(id, input).await?))
    }

    /// DELETE /admin/voices/:id
    pub async fn delete_voice(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_voice(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    // Names

    /// GET /admin/names
    pub async fn list_names(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Name>>> {
        Ok(Json(controller.admin_service.list_names().await?))
    }

    /// POST /admin/names
    pub async fn create_name(
        State(controller): State<Arc<AdminController>>,
        Json(input): Json<NameInput>,
    ) -> AppResult<(StatusCode, Json<Name>)> {
        let name = controller.admin_service.create_name(input).await?;
        Ok((StatusCode::CREATED, Json(name)))
    }

    /// PUT /admin/names/:id
    pub async fn update_name(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
        Json(input): Json<NameInput>,
    ) -> AppResult<Json<Name>> {
        Ok(Json(controller.admin_service.update_name(id, input).await?))
    }

    /// DELETE /admin/names/:id
    pub async fn delete_name(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_name(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    // Categories

    /// GET /admin/categories
    pub async fn list_categories(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Category>>> {
        Ok(Json(controller.admin_service.list_categories().await?))
    }

    /// POST /admin/categories
    pub async fn create_category(
        State(controller): State<Arc<AdminController>>,
        Json(input): Json<CategoryInput>,
    ) -> AppResult<(StatusCode, Json<Category>)> {
        let category = controller.admin_service.create_category(input).await?;
        Ok((StatusCode::CREATED, Json(category)))
    }

    /// PUT /admin/categories/:id
    pub async fn update_category(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
        Json(input): Json<CategoryInput>,
    ) -> AppResult<Json<Category>> {
        Ok(Json(controller.admin_service.update_category(id, input).await?))
    }

    /// DELETE /admin/categories/:id
    pub async fn delete_category(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<i64>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_category(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    // Snapshot

    /// GET /admin/snapshot - Export of the live store
    pub async fn export_snapshot(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<CatalogSnapshot>> {
        Ok(Json(controller.admin_service.export_snapshot().await?))
    }

    /// POST /admin/snapshot/refresh - Swap the snapshot serving public reads
    pub async fn refresh_snapshot(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<SnapshotSummary>> {
        Ok(Json(controller.admin_service.refresh_snapshot().await?))
    }
}
