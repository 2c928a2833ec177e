//! Per-resource data fetching: each hook owns its own signal slots, so
//! concurrent fetches from different hooks resolve independently and a slow
//! response can never overwrite another hook's data.

use carlot_types::{CarListing, Pagination, ServiceOffering};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast::{ToastContext, ToastLevel};

pub const CARS_FETCH_ERROR: &str = "Failed to load car listings.";
pub const SERVICES_FETCH_ERROR: &str = "Failed to load services.";

pub struct FetchOptions<T> {
    /// Pre-seeded data; skips the network fetch entirely.
    pub initial: Option<Vec<T>>,
    /// Marketing-view embed; also skips the fetch.
    pub preview: bool,
}

impl<T> Default for FetchOptions<T> {
    fn default() -> Self {
        Self {
            initial: None,
            preview: false,
        }
    }
}

/// Load state for one resource collection: the normalized list, a filtered
/// view the page may overwrite, a loading flag, an error slot and the
/// pagination descriptor when the server sent one.
pub struct ResourceState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub filtered: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub pagination: RwSignal<Option<Pagination>>,
}

impl<T: Send + Sync + 'static> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceState<T> {}

fn seeded_state<T: Clone + Send + Sync + 'static>(options: &FetchOptions<T>) -> (ResourceState<T>, bool) {
    let skipFetch = options.preview || options.initial.is_some();
    let items = options.initial.clone().unwrap_or_default();
    let state = ResourceState {
        items: RwSignal::new(items.clone()),
        filtered: RwSignal::new(items),
        // Starts loading unless a fetch will never happen.
        loading: RwSignal::new(!skipFetch),
        error: RwSignal::new(None),
        pagination: RwSignal::new(None),
    };
    (state, skipFetch)
}

#[derive(Clone, Copy)]
pub struct CarListings(pub ResourceState<CarListing>);

impl CarListings {
    /// One shot, no automatic retry: calling this again is the retry.
    pub fn fetch(&self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.0;
            let toasts = use_context::<ToastContext>();
            state.loading.set(true);
            state.error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_cars().await {
                    Ok((cars, pagination)) => {
                        state.items.set(cars.clone());
                        state.filtered.set(cars);
                        state.pagination.set(pagination);
                        state.loading.set(false);
                    }
                    Err(err) => {
                        state.loading.set(false);
                        state.error.set(Some(CARS_FETCH_ERROR.to_string()));
                        if let Some(toasts) = toasts {
                            toasts.push(err.message().to_string(), ToastLevel::Error);
                        }
                    }
                }
            });
        }
    }
}

pub fn use_car_listings(options: FetchOptions<CarListing>) -> CarListings {
    let (state, skipFetch) = seeded_state(&options);
    let hook = CarListings(state);
    if !skipFetch {
        hook.fetch();
    }
    hook
}

#[derive(Clone, Copy)]
pub struct ServiceOfferings(pub ResourceState<ServiceOffering>);

impl ServiceOfferings {
    pub fn fetch(&self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.0;
            let toasts = use_context::<ToastContext>();
            state.loading.set(true);
            state.error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_services().await {
                    Ok((services, pagination)) => {
                        state.items.set(services.clone());
                        state.filtered.set(services);
                        state.pagination.set(pagination);
                        state.loading.set(false);
                    }
                    Err(err) => {
                        state.loading.set(false);
                        state.error.set(Some(SERVICES_FETCH_ERROR.to_string()));
                        if let Some(toasts) = toasts {
                            toasts.push(err.message().to_string(), ToastLevel::Error);
                        }
                    }
                }
            });
        }
    }
}

pub fn use_service_offerings(options: FetchOptions<ServiceOffering>) -> ServiceOfferings {
    let (state, skipFetch) = seeded_state(&options);
    let hook = ServiceOfferings(state);
    if !skipFetch {
        hook.fetch();
    }
    hook
}
