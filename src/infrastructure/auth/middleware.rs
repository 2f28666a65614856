use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::auth::JwtManager, error::AppError};

/// Operator context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

/// Bearer token check for the admin routes
pub async fn admin_auth_middleware(
    State(jwt_manager): State<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let claims = jwt_manager.validate_token(token)?;

    tracing::debug!(subject = %claims.sub, path = %request.uri().path(), "Admin request");

    request.extensions_mut().insert(AdminUser { subject: claims.sub });

    Ok(next.run(request).await)
}
