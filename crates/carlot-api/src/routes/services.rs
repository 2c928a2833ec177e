use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use carlot_types::{ApiEnvelope, Pagination, ServiceOffering};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/services", get(get_services))
        .route("/api/v1/services/:id", get(get_service))
}

#[derive(Deserialize)]
pub struct ListQuery {
    page: Option<u32>,
    limit: Option<u32>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ServicesData {
    Flat(Vec<ServiceOffering>),
    Paged {
        services: Vec<ServiceOffering>,
        pagination: Pagination,
    },
}

async fn get_services(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ApiEnvelope<ServicesData>> {
    let page = state.store.list_services(query.page, query.limit);
    let data = match page.pagination {
        Some(pagination) => ServicesData::Paged {
            services: page.services,
            pagination,
        },
        None => ServicesData::Flat(page.services),
    };
    Json(ApiEnvelope::ok(data))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<ServiceOffering>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.store.get_service(&id)?)))
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::{body_json, get_request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn offerings_carry_their_provider() {
        let app = test_app();
        let response = app.oneshot(get_request("/api/v1/services")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let services = body["data"].as_array().unwrap();
        assert!(!services.is_empty());
        for service in services {
            assert!(service["provider"]["id"].as_str().is_some());
            assert!(service["provider"]["reviewCount"].as_u64().is_some());
        }
    }

    #[tokio::test]
    async fn paginated_offerings_nest_under_services_key() {
        let app = test_app();
        let response = app
            .oneshot(get_request("/api/v1/services?limit=2"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["services"].as_array().unwrap().len(), 2);
        assert!(body["data"]["pagination"]["total"].as_u64().unwrap() >= 2);
    }

    #[tokio::test]
    async fn unknown_offering_is_404() {
        let app = test_app();
        let response = app
            .oneshot(get_request("/api/v1/services/svc-nope"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
