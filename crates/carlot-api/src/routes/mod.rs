pub mod auth;
pub mod cars;
pub mod reviews;
pub mod services;

use axum::Router;

use crate::middleware::auth::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(auth::routes(state.clone()))
        .merge(cars::routes(state.clone()))
        .merge(services::routes(state.clone()))
        .merge(reviews::routes(state))
}
