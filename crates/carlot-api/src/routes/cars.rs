use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use carlot_types::{ApiEnvelope, CarListing, ListingStatus, Pagination};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/cars", get(get_cars))
        .route("/api/v1/cars/:id", get(get_car))
}

#[derive(Deserialize)]
pub struct ListQuery {
    page: Option<u32>,
    limit: Option<u32>,
    status: Option<ListingStatus>,
}

/// The collection is served flat unless the caller paginates, in which case
/// the array moves under a resource-named key next to the descriptor.
#[derive(Serialize)]
#[serde(untagged)]
enum CarsData {
    Flat(Vec<CarListing>),
    Paged {
        cars: Vec<CarListing>,
        pagination: Pagination,
    },
}

async fn get_cars(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ApiEnvelope<CarsData>> {
    let page = state.store.list_cars(query.page, query.limit, query.status);
    let data = match page.pagination {
        Some(pagination) => CarsData::Paged {
            cars: page.cars,
            pagination,
        },
        None => CarsData::Flat(page.cars),
    };
    Json(ApiEnvelope::ok(data))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<CarListing>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.store.get_car(&id)?)))
}
