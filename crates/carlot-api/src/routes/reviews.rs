use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use carlot_types::{ApiEnvelope, NewReview, Review};

use crate::error::ApiError;
use crate::jwt::Claims;
use crate::middleware::auth::{require_api_auth, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/v1/service-providers/:id/reviews", post(post_review))
        .route("/api/v1/reviews/:id/helpful", post(mark_helpful))
        .route("/api/v1/reviews/:id/report", post(report_review))
        .route_layer(middleware::from_fn_with_state(state, require_api_auth));

    Router::new()
        .route("/api/v1/service-providers/:id/reviews", get(get_reviews))
        .merge(protected)
}

async fn get_reviews(
    State(state): State<AppState>,
    Path(providerId): Path<String>,
) -> Result<Json<ApiEnvelope<Vec<Review>>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(
        state.store.reviews_for_provider(&providerId)?,
    )))
}

async fn post_review(
    State(state): State<AppState>,
    Path(providerId): Path<String>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<NewReview>,
) -> Result<Json<ApiEnvelope<Review>>, ApiError> {
    let review = state
        .store
        .add_review(&providerId, claims.to_author(), body)?;
    Ok(Json(ApiEnvelope::ok(review)))
}

async fn mark_helpful(
    State(state): State<AppState>,
    Path(reviewId): Path<String>,
) -> Result<Json<ApiEnvelope<Review>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.store.mark_helpful(&reviewId)?)))
}

async fn report_review(
    State(state): State<AppState>,
    Path(reviewId): Path<String>,
) -> Result<Json<ApiEnvelope<Review>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.store.report_review(&reviewId)?)))
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::{body_json, demo_token, get_request, json_request, test_app};
    use axum::http::{header, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn review_body() -> serde_json::Value {
        json!({"title": "Great", "comment": "In and out in an hour", "rating": 5})
    }

    #[tokio::test]
    async fn posting_without_a_token_is_401() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/service-providers/provider-axle/reviews",
                review_body(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn garbage_token_is_401() {
        let app = test_app();
        let mut request = json_request(
            "POST",
            "/api/v1/service-providers/provider-axle/reviews",
            review_body(),
        );
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, "Bearer not-a-jwt".parse().unwrap());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn authenticated_review_lands_and_lists() {
        let app = test_app();
        let token = demo_token(&app).await;

        let mut request = json_request(
            "POST",
            "/api/v1/service-providers/provider-axle/reviews",
            review_body(),
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["rating"], 5);
        assert_eq!(body["data"]["author"]["name"], "Demo Driver");
        assert_eq!(body["data"]["helpfulCount"], 0);
        let reviewId = body["data"]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(get_request(
                "/api/v1/service-providers/provider-axle/reviews",
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        let listed = body["data"].as_array().unwrap();
        assert!(listed.iter().any(|r| r["id"] == reviewId.as_str()));
    }

    #[tokio::test]
    async fn helpful_and_report_mutate_the_review() {
        let app = test_app();
        let token = demo_token(&app).await;
        let bearer = format!("Bearer {token}");

        let mut request = json_request(
            "POST",
            "/api/v1/service-providers/provider-quicklube/reviews",
            review_body(),
        );
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, bearer.parse().unwrap());
        let body = body_json(app.clone().oneshot(request).await.unwrap()).await;
        let reviewId = body["data"]["id"].as_str().unwrap().to_string();

        let mut request = json_request(
            "POST",
            &format!("/api/v1/reviews/{reviewId}/helpful"),
            json!({}),
        );
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, bearer.parse().unwrap());
        let body = body_json(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(body["data"]["helpfulCount"], 1);

        let mut request = json_request(
            "POST",
            &format!("/api/v1/reviews/{reviewId}/report"),
            json!({}),
        );
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, bearer.parse().unwrap());
        let body = body_json(app.oneshot(request).await.unwrap()).await;
        assert_eq!(body["data"]["reported"], true);
    }

    #[tokio::test]
    async fn out_of_range_rating_is_400() {
        let app = test_app();
        let token = demo_token(&app).await;
        let mut request = json_request(
            "POST",
            "/api/v1/service-providers/provider-axle/reviews",
            json!({"title": "", "comment": "x", "rating": 6}),
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
