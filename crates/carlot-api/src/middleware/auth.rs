use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use carlot_store::MarketStore;

use crate::error::ApiError;
use crate::jwt::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MarketStore>,
    pub jwt: Arc<JwtService>,
}

/// Middleware for protected routes: checks `Authorization: Bearer <jwt>`
/// and stashes the verified claims in request extensions for the handler.
pub async fn require_api_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let bearerToken = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let claims = match bearerToken.map(|t| state.jwt.verify(t)) {
        Some(Ok(claims)) => claims,
        _ => return ApiError::Unauthorized.into_response(),
    };

    request.extensions_mut().insert(claims);
    next.run(request).await
}
