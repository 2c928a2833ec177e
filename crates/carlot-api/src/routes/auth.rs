use axum::{extract::State, routing::post, Json, Router};
use carlot_types::{ApiEnvelope, AuthPayload, LoginRequest, RegisterRequest};

use crate::error::ApiError;
use crate::middleware::auth::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/login", post(handle_login))
        .route("/api/v1/auth/register", post(handle_register))
}

async fn handle_login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiEnvelope<AuthPayload>>, ApiError> {
    let user = state.store.authenticate(&body.email, &body.password)?;
    let token = state.jwt.issue(&user)?;
    Ok(Json(ApiEnvelope::ok(AuthPayload { token, user })))
}

async fn handle_register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<ApiEnvelope<AuthPayload>>, ApiError> {
    let user = state
        .store
        .register_user(&body.name, &body.email, &body.password)?;
    let token = state.jwt.issue(&user)?;
    Ok(Json(ApiEnvelope::ok(AuthPayload { token, user })))
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::{body_json, json_request, test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn login_returns_token_and_user() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                json!({"email": "demo@carlot.dev", "password": "test-drive-1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(!body["data"]["token"].as_str().unwrap().is_empty());
        assert_eq!(body["data"]["user"]["email"], "demo@carlot.dev");
        assert_eq!(body["data"]["user"]["role"], "user");
    }

    #[tokio::test]
    async fn bad_password_is_401_with_message() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                json!({"email": "demo@carlot.dev", "password": "wrong"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn register_creates_account_with_user_role() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                json!({"name": "New", "email": "new@example.com", "password": "longenough"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["user"]["role"], "user");
        assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_409() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                json!({"name": "Copy", "email": "demo@carlot.dev", "password": "longenough"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn short_password_is_400() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                json!({"name": "New", "email": "new@example.com", "password": "short"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
