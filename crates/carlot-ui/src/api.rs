//! Browser-side REST client. Every authenticated request reads the bearer
//! token from durable storage at call time, so a token stored by one tab is
//! picked up by the next request from any component.

#[derive(Clone, Debug, PartialEq)]
pub enum FetchError {
    /// The server rejected our credentials; the session should be destroyed.
    Unauthorized(String),
    Failed(String),
}

impl FetchError {
    pub fn message(&self) -> &str {
        match self {
            FetchError::Unauthorized(m) | FetchError::Failed(m) => m,
        }
    }
}

/// Compile-time override for deployments that host the API away from the
/// page origin; defaults to same-origin.
pub fn api_base() -> &'static str {
    option_env!("CARLOT_API_BASE").unwrap_or("/api/v1")
}

#[cfg(feature = "hydrate")]
mod client {
    use carlot_types::{
        normalize_car, normalize_service, ApiEnvelope, AuthPayload, CarListing, CollectionPayload,
        LoginRequest, NewReview, Pagination, RawCarRecord, RawServiceRecord, RegisterRequest,
        Review, ServiceOffering,
    };
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use super::{api_base, FetchError};
    use crate::session::{storage, TOKEN_STORAGE_KEY};

    const NETWORK_ERROR: &str = "Could not reach the server";

    fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
        match storage::read(TOKEN_STORAGE_KEY) {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        let status = response.status();
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|_| FetchError::Failed("Unexpected server response".into()))?;
        if envelope.success {
            envelope
                .data
                .ok_or_else(|| FetchError::Failed("Empty server response".into()))
        } else {
            let message = envelope
                .message
                .unwrap_or_else(|| "Request failed".to_string());
            if status == 401 {
                Err(FetchError::Unauthorized(message))
            } else {
                Err(FetchError::Failed(message))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
        let response = with_bearer(Request::get(&format!("{}{path}", api_base())))
            .send()
            .await
            .map_err(|_| FetchError::Failed(NETWORK_ERROR.into()))?;
        unwrap_envelope(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let request = with_bearer(Request::post(&format!("{}{path}", api_base())))
            .json(body)
            .map_err(|_| FetchError::Failed(NETWORK_ERROR.into()))?;
        let response = request
            .send()
            .await
            .map_err(|_| FetchError::Failed(NETWORK_ERROR.into()))?;
        unwrap_envelope(response).await
    }

    pub async fn login(email: &str, password: &str) -> Result<AuthPayload, String> {
        post_json(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
        .map_err(|e| fallback_message(e, crate::session::LOGIN_FALLBACK_ERROR))
    }

    pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthPayload, String> {
        post_json(
            "/auth/register",
            &RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
        .map_err(|e| fallback_message(e, crate::session::REGISTER_FALLBACK_ERROR))
    }

    /// Prefer whatever the server said; fall back to a generic message when
    /// the failure carried nothing displayable.
    fn fallback_message(error: FetchError, fallback: &str) -> String {
        let message = error.message();
        if message.is_empty() {
            fallback.to_string()
        } else {
            message.to_string()
        }
    }

    /// Both collection shapes come through here: the flat array and the
    /// paginated envelope. Records that fail normalization are dropped.
    pub async fn fetch_cars() -> Result<(Vec<CarListing>, Option<Pagination>), FetchError> {
        let payload: CollectionPayload<RawCarRecord> = get_json("/cars").await?;
        let (raw, pagination) = payload.into_parts();
        Ok((
            raw.into_iter().filter_map(normalize_car).collect(),
            pagination,
        ))
    }

    pub async fn fetch_services() -> Result<(Vec<ServiceOffering>, Option<Pagination>), FetchError>
    {
        let payload: CollectionPayload<RawServiceRecord> = get_json("/services").await?;
        let (raw, pagination) = payload.into_parts();
        Ok((
            raw.into_iter().filter_map(normalize_service).collect(),
            pagination,
        ))
    }

    pub async fn fetch_provider_reviews(provider_id: &str) -> Result<Vec<Review>, FetchError> {
        get_json(&format!("/service-providers/{provider_id}/reviews")).await
    }

    pub async fn submit_review(provider_id: &str, review: &NewReview) -> Result<Review, FetchError> {
        post_json(&format!("/service-providers/{provider_id}/reviews"), review).await
    }

    pub async fn mark_review_helpful(review_id: &str) -> Result<Review, FetchError> {
        post_json(&format!("/reviews/{review_id}/helpful"), &()).await
    }

    pub async fn report_review(review_id: &str) -> Result<Review, FetchError> {
        post_json(&format!("/reviews/{review_id}/report"), &()).await
    }
}

#[cfg(feature = "hydrate")]
pub use client::*;
