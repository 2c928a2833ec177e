#![allow(non_snake_case)]

pub mod cars;
pub mod error;
pub mod reviews;
pub mod seed;
pub mod services;
pub mod users;

pub use error::StoreError;

use std::sync::RwLock;

use carlot_types::{CarListing, ServiceOffering};
use reviews::StoredReview;
use users::User;

/// In-memory marketplace state. All mutation goes through the RwLocks;
/// writes are last-write-wins.
pub struct MarketStore {
    users: RwLock<Vec<User>>,
    cars: RwLock<Vec<CarListing>>,
    services: RwLock<Vec<ServiceOffering>>,
    reviews: RwLock<Vec<StoredReview>>,
}

impl MarketStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            cars: RwLock::new(Vec::new()),
            services: RwLock::new(Vec::new()),
            reviews: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-populated with the demo inventory.
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::populate(&store);
        store
    }
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::new()
    }
}
