use serde::{Deserialize, Serialize};

/// Asset served when a provider has no profile image.
pub const PLACEHOLDER_PROVIDER_IMAGE: &str = "/assets/placeholder-provider.svg";

/// Rating shown for providers that have not been rated yet.
pub const DEFAULT_PROVIDER_RATING: f32 = 4.5;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        ServiceStatus::Active
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub review_count: u32,
    pub image: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub description: String,
    pub verified: bool,
}

/// Canonical client-side shape of a bookable automotive service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub category: String,
    pub status: ServiceStatus,
    pub provider: ServiceProvider,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default, alias = "reviews")]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawServiceRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<ServiceStatus>,
    #[serde(default)]
    pub provider: Option<RawProviderRecord>,
}

fn normalize_provider(raw: RawProviderRecord) -> ServiceProvider {
    ServiceProvider {
        id: raw.id.unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        rating: raw.rating.unwrap_or(DEFAULT_PROVIDER_RATING),
        review_count: raw.review_count.unwrap_or_default(),
        image: raw
            .image
            .unwrap_or_else(|| PLACEHOLDER_PROVIDER_IMAGE.to_string()),
        location: raw.location.unwrap_or_default(),
        specialties: raw.specialties,
        description: raw.description.unwrap_or_default(),
        verified: raw.verified.unwrap_or(false),
    }
}

/// Map a raw offering into the canonical shape. As with car listings, a
/// record with no id is dropped rather than given an invented key.
pub fn normalize_service(raw: RawServiceRecord) -> Option<ServiceOffering> {
    let id = raw.id?;
    Some(ServiceOffering {
        id,
        name: raw.name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        price: raw.price.unwrap_or_default(),
        duration: raw.duration.unwrap_or_default(),
        category: raw.category.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        provider: normalize_provider(raw.provider.unwrap_or_default()),
    })
}
