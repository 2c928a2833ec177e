use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReviewAuthor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub title: String,
    pub comment: String,
    pub rating: u8,
    pub author: ReviewAuthor,
    pub created_at: String,
    pub helpful_count: u32,
    pub reported: bool,
}

/// Body of a review submission; the author is taken from the verified
/// session, never from the payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewReview {
    pub title: String,
    pub comment: String,
    pub rating: u8,
}
