use axum::{
    http::Method,
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::auth::JwtManager;
use crate::error::AppError;
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{
        admin::AdminController, catalog::CatalogController, generation::GenerationController,
        health,
    },
    infrastructure::auth::{admin_auth_middleware, request_id_middleware},
};

/// Assemble every route of the service
pub fn build_router(
    pool: Arc<DbPool>,
    jwt_manager: Arc<JwtManager>,
    catalog_controller: Arc<CatalogController>,
    admin_controller: Arc<AdminController>,
    generation_controller: Arc<GenerationController>,
) -> Router {
    // Public catalog routes, callable from any browser origin
    let public_routes = Router::new()
        .route("/options", get(CatalogController::get_options))
        .route("/simulateAPICall", get(CatalogController::simulate_api_call))
        .with_state(catalog_controller)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        );

    // Catalog record management (admin token required)
    let admin_routes = Router::new()
        .route(
            "/admin/languages",
            get(AdminController::list_languages).post(AdminController::create_language),
        )
        .route(
            "/admin/languages/:id",
            put(AdminController::update_language).delete(AdminController::delete_language),
        )
        .route(
            "/admin/voices",
            get(AdminController::list_voices).post(AdminController::create_voice),
        )
        .route(
            "/admin/voices/:id",
            put(AdminController::update_voice).delete(AdminController::delete_voice),
        )
        .route(
            "/admin/names",
            get(AdminController::list_names).post(AdminController::create_name),
        )
        .route(
            "/admin/names/:id",
            put(AdminController::update_name).delete(AdminController::delete_name),
        )
        .route(
            "/admin/categories",
            get(AdminController::list_categories).post(AdminController::create_category),
        )
        .route(
            "/admin/categories/:id",
            put(AdminController::update_category).delete(AdminController::delete_category),
        )
        .route("/admin/snapshot", get(AdminController::export_snapshot))
        .route(
            "/admin/snapshot/refresh",
            post(AdminController::refresh_snapshot),
        )
        .with_state(admin_controller)
        .layer(middleware::from_fn_with_state(
            jwt_manager.clone(),
            admin_auth_middleware,
        ));

    // Content generation (admin token required)
    let generation_routes = Router::new()
        .route(
            "/admin/categories/:id/themes",
            post(GenerationController::generate_themes),
        )
        .route(
            "/admin/categories/:id/general",
            get(GenerationController::list_general),
        )
        .route(
            "/admin/general/:id/text",
            post(GenerationController::generate_general_text),
        )
        .route(
            "/admin/general/:id/audio",
            post(GenerationController::synthesize_general),
        )
        .route(
            "/admin/names/:id/messages",
            get(GenerationController::list_personal).post(GenerationController::generate_personal),
        )
        .route(
            "/admin/personal/:id/audio",
            post(GenerationController::synthesize_personal),
        )
        .route(
            "/admin/personal/:id",
            axum::routing::delete(GenerationController::delete_personal),
        )
        .with_state(generation_controller)
        .layer(middleware::from_fn_with_state(
            jwt_manager,
            admin_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(public_routes)
        .merge(admin_routes)
        .merge(generation_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Bind the configured address and serve until shutdown
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
