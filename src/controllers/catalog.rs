use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::domain::options::{CatalogOptions, OptionsService, OptionsServiceApi};
use crate::domain::selection::{
    AudioFilesResponse, SelectionRequest, SelectionService, SelectionServiceApi,
    SimulateApiCallQuery,
};
use crate::error::AppResult;

/// Public read endpoints consumed by the selection UI
pub struct CatalogController {
    options_service: Arc<OptionsService>,
    selection_service: Arc<SelectionService>,
}

impl CatalogController {
    pub fn new(
        options_service: Arc<OptionsService>,
        selection_service: Arc<SelectionService>,
    ) -> Self {
        Self {
            options_service,
            selection_service,
        }
    }

    /// GET /options - Whole catalog as selection lists
    pub async fn get_options(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<CatalogOptions>> {
        let options = controller.options_service.get_options().await?;
        Ok(Json(options))
    }

    /// GET /simulateAPICall - Greeting plus sampled general audio links
    pub async fn simulate_api_call(
        State(controller): State<Arc<CatalogController>>,
        Query(query): Query<SimulateApiCallQuery>,
    ) -> AppResult<Json<AudioFilesResponse>> {
        let selection = controller
            .selection_service
            .resolve(SelectionRequest::from(query))
            .await?;

        Ok(Json(AudioFilesResponse {
            audio_files: selection.into_audio_files(),
        }))
    }
}
