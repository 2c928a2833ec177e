use carlot_types::{NewReview, Review, ReviewAuthor, MAX_RATING, MIN_RATING};
use uuid::Uuid;

use crate::{MarketStore, StoreError};

/// A review row plus the provider it belongs to. The provider link stays
/// store-internal; the wire shape is just `Review`.
#[derive(Clone, Debug)]
pub struct StoredReview {
    pub provider_id: String,
    pub review: Review,
}

impl MarketStore {
    pub fn reviews_for_provider(&self, provider_id: &str) -> Result<Vec<Review>, StoreError> {
        if !self.provider_exists(provider_id) {
            return Err(StoreError::NotFound("service provider"));
        }
        let reviews = self.reviews.read().unwrap_or_else(|e| e.into_inner());
        Ok(reviews
            .iter()
            .filter(|r| r.provider_id == provider_id)
            .map(|r| r.review.clone())
            .collect())
    }

    pub fn add_review(
        &self,
        provider_id: &str,
        author: ReviewAuthor,
        new: NewReview,
    ) -> Result<Review, StoreError> {
        if !self.provider_exists(provider_id) {
            return Err(StoreError::NotFound("service provider"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&new.rating) {
            return Err(StoreError::Validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        if new.comment.trim().is_empty() {
            return Err(StoreError::Validation("A comment is required".into()));
        }

        let review = Review {
            id: Uuid::new_v4().to_string(),
            title: new.title.trim().to_string(),
            comment: new.comment.trim().to_string(),
            rating: new.rating,
            author,
            created_at: chrono::Utc::now().to_rfc3339(),
            helpful_count: 0,
            reported: false,
        };
        self.reviews
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(StoredReview {
                provider_id: provider_id.to_string(),
                review: review.clone(),
            });
        self.absorb_provider_rating(provider_id, new.rating);
        Ok(review)
    }

    pub fn mark_helpful(&self, review_id: &str) -> Result<Review, StoreError> {
        let mut reviews = self.reviews.write().unwrap_or_else(|e| e.into_inner());
        let stored = reviews
            .iter_mut()
            .find(|r| r.review.id == review_id)
            .ok_or(StoreError::NotFound("review"))?;
        stored.review.helpful_count += 1;
        Ok(stored.review.clone())
    }

    pub fn report_review(&self, review_id: &str) -> Result<Review, StoreError> {
        let mut reviews = self.reviews.write().unwrap_or_else(|e| e.into_inner());
        let stored = reviews
            .iter_mut()
            .find(|r| r.review.id == review_id)
            .ok_or(StoreError::NotFound("review"))?;
        stored.review.reported = true;
        tracing::warn!("review {review_id} reported");
        Ok(stored.review.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_types::{ServiceOffering, ServiceProvider, ServiceStatus};

    fn author() -> ReviewAuthor {
        ReviewAuthor {
            id: "u-1".into(),
            name: "Sam".into(),
            avatar: None,
        }
    }

    fn store_with_provider() -> MarketStore {
        let store = MarketStore::new();
        store.insert_service(ServiceOffering {
            id: "svc-1".into(),
            name: "MOT test".into(),
            description: String::new(),
            price: 55.0,
            duration: "1 hr".into(),
            category: "inspection".into(),
            status: ServiceStatus::Active,
            provider: ServiceProvider {
                id: "p-1".into(),
                name: "Garage".into(),
                rating: 5.0,
                review_count: 1,
                image: String::new(),
                location: String::new(),
                specialties: vec![],
                description: String::new(),
                verified: true,
            },
        });
        store
    }

    fn submission(rating: u8) -> NewReview {
        NewReview {
            title: "Solid".into(),
            comment: "Done on time".into(),
            rating,
        }
    }

    #[test]
    fn add_review_appears_for_provider_and_updates_rating() {
        let store = store_with_provider();
        let review = store.add_review("p-1", author(), submission(3)).unwrap();
        assert_eq!(review.helpful_count, 0);
        assert!(!review.reported);
        let listed = store.reviews_for_provider("p-1").unwrap();
        assert_eq!(listed, vec![review]);
        let provider = store.get_service("svc-1").unwrap().provider;
        assert_eq!(provider.review_count, 2);
        assert!((provider.rating - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        let store = store_with_provider();
        for rating in [0u8, 6] {
            let result = store.add_review("p-1", author(), submission(rating));
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }
    }

    #[test]
    fn empty_comment_is_rejected() {
        let store = store_with_provider();
        let result = store.add_review(
            "p-1",
            author(),
            NewReview {
                title: String::new(),
                comment: "   ".into(),
                rating: 4,
            },
        );
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn unknown_provider_is_not_found() {
        let store = store_with_provider();
        let result = store.add_review("p-404", author(), submission(4));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn helpful_increments_and_report_flags() {
        let store = store_with_provider();
        let review = store.add_review("p-1", author(), submission(5)).unwrap();
        assert_eq!(store.mark_helpful(&review.id).unwrap().helpful_count, 1);
        assert_eq!(store.mark_helpful(&review.id).unwrap().helpful_count, 2);
        assert!(store.report_review(&review.id).unwrap().reported);
    }
}
