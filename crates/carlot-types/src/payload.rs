use serde::{Deserialize, Serialize};

/// Standard response wrapper for every REST endpoint: `success` plus either
/// `data` or a user-displayable `message`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub pages: u32,
    pub current_page: u32,
    pub limit: u32,
}

/// The two collection shapes the API serves, decoded explicitly instead of
/// probing fields: a flat array, or an object carrying the array under a
/// resource-named key next to a pagination descriptor.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CollectionPayload<T> {
    Flat(Vec<T>),
    Paginated {
        #[serde(alias = "cars", alias = "services", alias = "reviews")]
        items: Vec<T>,
        pagination: Pagination,
    },
}

impl<T> CollectionPayload<T> {
    pub fn into_parts(self) -> (Vec<T>, Option<Pagination>) {
        match self {
            CollectionPayload::Flat(items) => (items, None),
            CollectionPayload::Paginated { items, pagination } => (items, Some(pagination)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_decodes_items_and_pagination() {
        let body = r#"{
            "success": true,
            "data": {
                "cars": [{"n": 1}, {"n": 2}],
                "pagination": {"total": 12, "pages": 6, "currentPage": 1, "limit": 2}
            }
        }"#;
        let envelope: ApiEnvelope<CollectionPayload<serde_json::Value>> =
            serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        let (items, pagination) = envelope.data.unwrap().into_parts();
        assert_eq!(items.len(), 2);
        let pagination = pagination.unwrap();
        assert_eq!(pagination.total, 12);
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.limit, 2);
    }

    #[test]
    fn flat_envelope_decodes_plain_array() {
        let body = r#"{"success": true, "data": [{"n": 1}, {"n": 2}, {"n": 3}]}"#;
        let envelope: ApiEnvelope<CollectionPayload<serde_json::Value>> =
            serde_json::from_str(body).unwrap();
        let (items, pagination) = envelope.data.unwrap().into_parts();
        assert_eq!(items.len(), 3);
        assert!(pagination.is_none());
    }

    #[test]
    fn services_key_decodes_via_alias() {
        let body = r#"{
            "services": [{"n": 1}],
            "pagination": {"total": 1, "pages": 1, "currentPage": 1, "limit": 10}
        }"#;
        let payload: CollectionPayload<serde_json::Value> = serde_json::from_str(body).unwrap();
        let (items, pagination) = payload.into_parts();
        assert_eq!(items.len(), 1);
        assert!(pagination.is_some());
    }

    #[test]
    fn failure_envelope_carries_message() {
        let body = r#"{"success": false, "message": "Invalid credentials"}"#;
        let envelope: ApiEnvelope<CollectionPayload<serde_json::Value>> =
            serde_json::from_str(body).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
    }
}
