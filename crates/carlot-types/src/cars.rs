use serde::{Deserialize, Serialize};

/// Asset served when a listing arrives without photos.
pub const PLACEHOLDER_CAR_IMAGE: &str = "/assets/placeholder-car.svg";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Certified,
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Used
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Sold,
    Pending,
    Draft,
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Active
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    /// Lowercase-normalizing parse with a fallback for anything the upstream
    /// record left blank or misspelled.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "manual" => Transmission::Manual,
            _ => Transmission::Automatic,
        }
    }
}

impl Default for Transmission {
    fn default() -> Self {
        Transmission::Automatic
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Canonical client-side shape of a car listing. Every instance carries a
/// stable id usable as a rendering key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: f64,
    pub mileage: u32,
    pub condition: Condition,
    pub transmission: Transmission,
    pub status: ListingStatus,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub seller: Seller,
}

/// A car record as the server actually sends it: loosely shaped, with
/// optional fields and legacy key names.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCarRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub status: Option<ListingStatus>,
    #[serde(default, alias = "imageUrls")]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub seller: Option<Seller>,
}

/// Map a raw record into the canonical shape, substituting defaults for
/// absent optional fields. Records with no id at all are dropped: an entity
/// without a stable key cannot be rendered or reconciled.
pub fn normalize_car(raw: RawCarRecord) -> Option<CarListing> {
    let id = raw.id?;
    let images = if raw.images.is_empty() {
        vec![PLACEHOLDER_CAR_IMAGE.to_string()]
    } else {
        raw.images
    };
    Some(CarListing {
        id,
        make: raw.make.unwrap_or_default(),
        model: raw.model.unwrap_or_default(),
        year: raw.year.unwrap_or_default(),
        price: raw.price.unwrap_or_default(),
        mileage: raw.mileage.unwrap_or_default(),
        condition: raw.condition.unwrap_or_default(),
        transmission: raw
            .transmission
            .as_deref()
            .map(Transmission::parse_lossy)
            .unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        images,
        description: raw.description.unwrap_or_default(),
        features: raw.features,
        seller: raw.seller.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_listing() -> CarListing {
        CarListing {
            id: "car-9".into(),
            make: "Subaru".into(),
            model: "Outback".into(),
            year: 2021,
            price: 27_500.0,
            mileage: 41_000,
            condition: Condition::Certified,
            transmission: Transmission::Manual,
            status: ListingStatus::Active,
            images: vec!["/img/outback.jpg".into()],
            description: "One owner".into(),
            features: vec!["AWD".into()],
            seller: Seller {
                id: "u-3".into(),
                name: "Avery".into(),
                email: "avery@example.com".into(),
            },
        }
    }

    #[test]
    fn sparse_record_gets_defaults() {
        let raw: RawCarRecord =
            serde_json::from_str(r#"{"_id": "car-1", "make": "Honda"}"#).unwrap();
        let car = normalize_car(raw).unwrap();
        assert_eq!(car.id, "car-1");
        assert_eq!(car.make, "Honda");
        assert_eq!(car.images, vec![PLACEHOLDER_CAR_IMAGE.to_string()]);
        assert_eq!(car.condition, Condition::Used);
        assert_eq!(car.transmission, Transmission::Automatic);
        assert_eq!(car.status, ListingStatus::Active);
    }

    #[test]
    fn record_without_id_is_dropped() {
        let raw: RawCarRecord = serde_json::from_str(r#"{"make": "Honda"}"#).unwrap();
        assert!(normalize_car(raw).is_none());
    }

    #[test]
    fn transmission_is_lowercase_normalized_with_fallback() {
        assert_eq!(Transmission::parse_lossy("MANUAL"), Transmission::Manual);
        assert_eq!(Transmission::parse_lossy(" Manual "), Transmission::Manual);
        assert_eq!(Transmission::parse_lossy("stick"), Transmission::Automatic);
        assert_eq!(Transmission::parse_lossy(""), Transmission::Automatic);
    }

    #[test]
    fn legacy_image_key_is_accepted() {
        let raw: RawCarRecord = serde_json::from_str(
            r#"{"id": "car-2", "imageUrls": ["/img/a.jpg", "/img/b.jpg"]}"#,
        )
        .unwrap();
        let car = normalize_car(raw).unwrap();
        assert_eq!(car.images.len(), 2);
    }

    #[test]
    fn normalization_is_idempotent() {
        let car = full_listing();
        let reparsed: RawCarRecord =
            serde_json::from_str(&serde_json::to_string(&car).unwrap()).unwrap();
        assert_eq!(normalize_car(reparsed).unwrap(), car);
    }
}
