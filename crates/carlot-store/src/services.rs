use carlot_types::{Pagination, ServiceOffering};

use crate::cars::paginate;
use crate::{MarketStore, StoreError};

pub struct ServicePage {
    pub services: Vec<ServiceOffering>,
    pub pagination: Option<Pagination>,
}

impl MarketStore {
    pub fn list_services(&self, page: Option<u32>, limit: Option<u32>) -> ServicePage {
        let services = self.services.read().unwrap_or_else(|e| e.into_inner());
        let (services, pagination) = paginate(&services, page, limit);
        ServicePage {
            services,
            pagination,
        }
    }

    pub fn get_service(&self, id: &str) -> Result<ServiceOffering, StoreError> {
        let services = self.services.read().unwrap_or_else(|e| e.into_inner());
        services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("service offering"))
    }

    pub fn insert_service(&self, offering: ServiceOffering) {
        self.services
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(offering);
    }

    pub(crate) fn provider_exists(&self, provider_id: &str) -> bool {
        let services = self.services.read().unwrap_or_else(|e| e.into_inner());
        services.iter().any(|s| s.provider.id == provider_id)
    }

    /// Fold a freshly accepted rating into every offering row carrying this
    /// provider, keeping the displayed average and count in step.
    pub(crate) fn absorb_provider_rating(&self, provider_id: &str, rating: u8) {
        let mut services = self.services.write().unwrap_or_else(|e| e.into_inner());
        for offering in services.iter_mut() {
            let provider = &mut offering.provider;
            if provider.id != provider_id {
                continue;
            }
            let count = provider.review_count as f32;
            provider.rating = (provider.rating * count + rating as f32) / (count + 1.0);
            provider.review_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_types::{ServiceProvider, ServiceStatus};

    fn offering(id: &str, provider_id: &str, rating: f32, count: u32) -> ServiceOffering {
        ServiceOffering {
            id: id.into(),
            name: "Tyre rotation".into(),
            description: String::new(),
            price: 40.0,
            duration: "30 min".into(),
            category: "maintenance".into(),
            status: ServiceStatus::Active,
            provider: ServiceProvider {
                id: provider_id.into(),
                name: "Garage".into(),
                rating,
                review_count: count,
                image: String::new(),
                location: String::new(),
                specialties: vec![],
                description: String::new(),
                verified: false,
            },
        }
    }

    #[test]
    fn lookup_by_id() {
        let store = MarketStore::new();
        store.insert_service(offering("svc-1", "p-1", 4.0, 1));
        assert_eq!(store.get_service("svc-1").unwrap().id, "svc-1");
        assert!(matches!(
            store.get_service("svc-9"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn rating_average_tracks_new_reviews() {
        let store = MarketStore::new();
        store.insert_service(offering("svc-1", "p-1", 4.0, 1));
        store.insert_service(offering("svc-2", "p-1", 4.0, 1));
        store.absorb_provider_rating("p-1", 2);
        for id in ["svc-1", "svc-2"] {
            let provider = store.get_service(id).unwrap().provider;
            assert_eq!(provider.review_count, 2);
            assert!((provider.rating - 3.0).abs() < f32::EPSILON);
        }
    }
}
