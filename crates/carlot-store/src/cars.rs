use carlot_types::{CarListing, ListingStatus, Pagination};

use crate::{MarketStore, StoreError};

/// One page of listings. `pagination` is `None` when the caller asked for
/// the whole collection, which selects the flat wire shape.
pub struct CarPage {
    pub cars: Vec<CarListing>,
    pub pagination: Option<Pagination>,
}

const DEFAULT_PAGE_LIMIT: u32 = 10;

pub(crate) fn paginate<T: Clone>(
    items: &[T],
    page: Option<u32>,
    limit: Option<u32>,
) -> (Vec<T>, Option<Pagination>) {
    if page.is_none() && limit.is_none() {
        return (items.to_vec(), None);
    }
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
    let currentPage = page.unwrap_or(1).max(1);
    let total = items.len() as u64;
    let pages = (total as u32).div_ceil(limit).max(1);
    let start = (currentPage as usize - 1) * limit as usize;
    let window = items
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();
    (
        window,
        Some(Pagination {
            total,
            pages,
            current_page: currentPage,
            limit,
        }),
    )
}

impl MarketStore {
    /// Drafts never appear in the public listing feed.
    pub fn list_cars(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        status: Option<ListingStatus>,
    ) -> CarPage {
        let cars = self.cars.read().unwrap_or_else(|e| e.into_inner());
        let visible: Vec<CarListing> = cars
            .iter()
            .filter(|c| c.status != ListingStatus::Draft)
            .filter(|c| status.map(|s| c.status == s).unwrap_or(true))
            .cloned()
            .collect();
        let (cars, pagination) = paginate(&visible, page, limit);
        CarPage { cars, pagination }
    }

    pub fn get_car(&self, id: &str) -> Result<CarListing, StoreError> {
        let cars = self.cars.read().unwrap_or_else(|e| e.into_inner());
        cars.iter()
            .find(|c| c.id == id && c.status != ListingStatus::Draft)
            .cloned()
            .ok_or(StoreError::NotFound("car listing"))
    }

    pub fn insert_car(&self, car: CarListing) {
        self.cars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(car);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_types::{Condition, Seller, Transmission};

    fn listing(id: &str, status: ListingStatus) -> CarListing {
        CarListing {
            id: id.into(),
            make: "Mazda".into(),
            model: "3".into(),
            year: 2020,
            price: 15_000.0,
            mileage: 60_000,
            condition: Condition::Used,
            transmission: Transmission::Automatic,
            status,
            images: vec![],
            description: String::new(),
            features: vec![],
            seller: Seller::default(),
        }
    }

    fn store_with(n: usize) -> MarketStore {
        let store = MarketStore::new();
        for i in 0..n {
            store.insert_car(listing(&format!("car-{i}"), ListingStatus::Active));
        }
        store
    }

    #[test]
    fn no_query_params_yields_flat_page() {
        let page = store_with(3).list_cars(None, None, None);
        assert_eq!(page.cars.len(), 3);
        assert!(page.pagination.is_none());
    }

    #[test]
    fn paginated_window_and_descriptor() {
        let page = store_with(12).list_cars(Some(2), Some(5), None);
        assert_eq!(page.cars.len(), 5);
        assert_eq!(page.cars[0].id, "car-5");
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total, 12);
        assert_eq!(pagination.pages, 3);
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.limit, 5);
    }

    #[test]
    fn limit_alone_implies_first_page() {
        let page = store_with(12).list_cars(None, Some(4), None);
        assert_eq!(page.cars.len(), 4);
        assert_eq!(page.pagination.unwrap().current_page, 1);
    }

    #[test]
    fn drafts_are_hidden_from_listing_and_lookup() {
        let store = store_with(2);
        store.insert_car(listing("car-draft", ListingStatus::Draft));
        let page = store.list_cars(None, None, None);
        assert_eq!(page.cars.len(), 2);
        assert!(matches!(
            store.get_car("car-draft"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn status_filter_narrows_results() {
        let store = store_with(2);
        store.insert_car(listing("car-sold", ListingStatus::Sold));
        let page = store.list_cars(None, None, Some(ListingStatus::Sold));
        assert_eq!(page.cars.len(), 1);
        assert_eq!(page.cars[0].id, "car-sold");
    }
}
