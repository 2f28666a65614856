use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::catalog::{GeneralMessage, PersonalMessage};
use crate::domain::generation::{
    GeneratePersonalRequest, GenerateThemesRequest, GenerationService, GenerationServiceApi,
    ThemeGenerationResult,
};
use crate::error::AppResult;

/// Content generation workflows under /admin
pub struct GenerationController {
    generation_service: Arc<GenerationService>,
}

impl GenerationController {
    pub fn new(generation_service: Arc<GenerationService>) -> Self {
        Self { generation_service }
    }

    /// POST /admin/categories/:id/themes - Generate theme/topic rows
    pub async fn generate_themes(
        State(controller): State<Arc<GenerationController>>,
        Path(category_id): Path<i64>,
        Json(request): Json<GenerateThemesRequest>,
    ) -> AppResult<(StatusCode, Json<ThemeGenerationResult>)> {
        let result = controller
            .generation_service
            .generate_themes(category_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(result)))
    }

    /// GET /admin/categories/:id/general
    pub async fn list_general(
        State(controller): State<Arc<GenerationController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<Json<Vec<GeneralMessage>>> {
        let general = controller
            .generation_service
            .list_general(category_id)
            .await?;
        Ok(Json(general))
    }

    /// POST /admin/general/:id/text
    pub async fn generate_general_text(
        State(controller): State<Arc<GenerationController>>,
        Path(general_id): Path<i64>,
    ) -> AppResult<Json<GeneralMessage>> {
        let general = controller
            .generation_service
            .generate_general_text(general_id)
            .await?;
        Ok(Json(general))
    }

    /// POST /admin/general/:id/audio
    pub async fn synthesize_general(
        State(controller): State<Arc<GenerationController>>,
        Path(general_id): Path<i64>,
    ) -> AppResult<Json<GeneralMessage>> {
        let general = controller
            .generation_service
            .synthesize_general(general_id)
            .await?;
        Ok(Json(general))
    }

    /// POST /admin/names/:id/messages - Generate and voice a personal message
    pub async fn generate_personal(
        State(controller): State<Arc<GenerationController>>,
        Path(name_id): Path<i64>,
        Json(request): Json<GeneratePersonalRequest>,
    ) -> AppResult<(StatusCode, Json<PersonalMessage>)> {
        let personal = controller
            .generation_service
            .generate_personal(name_id, request.message_type)
            .await?;
        Ok((StatusCode::CREATED, Json(personal)))
    }

    /// GET /admin/names/:id/messages
    pub async fn list_personal(
        State(controller): State<Arc<GenerationController>>,
        Path(name_id): Path<i64>,
    ) -> AppResult<Json<Vec<PersonalMessage>>> {
        let personal = controller.generation_service.list_personal(name_id).await?;
        Ok(Json(personal))
    }

    /// POST /admin/personal/:id/audio
    pub async fn synthesize_personal(
        State(controller): State<Arc<GenerationController>>,
        Path(personal_id): Path<i64>,
    ) -> AppResult<Json<PersonalMessage>> {
        let personal = controller
            .generation_service
            .synthesize_personal(personal_id)
            .await?;
        Ok(Json(personal))
    }

    /// DELETE /admin/personal/:id
    pub async fn delete_personal(
        State(controller): State<Arc<GenerationController>>,
        Path(personal_id): Path<i64>,
    ) -> AppResult<StatusCode> {
        controller
            .generation_service
            .delete_personal(personal_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
