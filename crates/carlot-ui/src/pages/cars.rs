use carlot_types::CarListing;
use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::hooks::{use_car_listings, FetchOptions};

pub(crate) fn filter_listings(
    cars: &[CarListing],
    make: &str,
    max_price: Option<f64>,
) -> Vec<CarListing> {
    let needle = make.trim().to_ascii_lowercase();
    cars.iter()
        .filter(|car| needle.is_empty() || car.make.to_ascii_lowercase().contains(&needle))
        .filter(|car| max_price.map(|p| car.price <= p).unwrap_or(true))
        .cloned()
        .collect()
}

#[component]
pub fn CarsPage() -> impl IntoView {
    let listings = use_car_listings(FetchOptions::default());
    let state = listings.0;

    let (makeFilter, setMakeFilter) = signal(String::new());
    let (maxPrice, setMaxPrice) = signal(String::new());

    // Client-side filtering only rewrites the filtered view; the canonical
    // list stays intact for the next filter change.
    let applyFilters = move || {
        let cars = state.items.get_untracked();
        let price = maxPrice.get_untracked().trim().parse::<f64>().ok();
        state
            .filtered
            .set(filter_listings(&cars, &makeFilter.get_untracked(), price));
    };

    view! {
        <div class="dashboard-header">
            <h1>"Cars"</h1>
            <p class="subtitle">"Every listing currently on the lot"</p>
        </div>
        <div class="filter-bar">
            <input
                type="text"
                placeholder="Filter by make"
                prop:value=makeFilter
                on:input=move |ev| {
                    setMakeFilter.set(event_target_value(&ev));
                    applyFilters();
                }
            />
            <input
                type="number"
                placeholder="Max price"
                prop:value=maxPrice
                on:input=move |ev| {
                    setMaxPrice.set(event_target_value(&ev));
                    applyFilters();
                }
            />
        </div>
        {move || {
            if state.loading.get() {
                return view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading car listings..."
                    </div>
                }
                    .into_any();
            }
            if let Some(error) = state.error.get() {
                return view! {
                    <div class="card">
                        <p class="login-error">{error}</p>
                        <button class="btn btn-ghost btn-sm" on:click=move |_| listings.fetch()>
                            "Try again"
                        </button>
                    </div>
                }
                    .into_any();
            }
            let cars = state.filtered.get();
            if cars.is_empty() {
                return view! {
                    <div class="card">
                        <p>"No cars match the current filters."</p>
                    </div>
                }
                    .into_any();
            }
            view! {
                {move || {
                    state
                        .pagination
                        .get()
                        .map(|p| {
                            view! {
                                <p class="subtitle">
                                    {format!(
                                        "Page {} of {} \u{00B7} {} cars",
                                        p.current_page,
                                        p.pages,
                                        p.total,
                                    )}
                                </p>
                            }
                        })
                }}
                <div class="car-grid">
                    {cars
                        .into_iter()
                        .map(|car| view! { <CarCard car=car /> })
                        .collect_view()}
                </div>
            }
                .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_types::{Condition, ListingStatus, Seller, Transmission};

    fn listing(make: &str, price: f64) -> CarListing {
        CarListing {
            id: format!("car-{make}"),
            make: make.into(),
            model: "X".into(),
            year: 2020,
            price,
            mileage: 0,
            condition: Condition::Used,
            transmission: Transmission::Automatic,
            status: ListingStatus::Active,
            images: vec![],
            description: String::new(),
            features: vec![],
            seller: Seller::default(),
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let cars = [listing("Honda", 10_000.0), listing("Tesla", 40_000.0)];
        assert_eq!(filter_listings(&cars, "", None).len(), 2);
    }

    #[test]
    fn make_filter_is_case_insensitive_substring() {
        let cars = [listing("Honda", 10_000.0), listing("Hyundai", 15_000.0)];
        let hits = filter_listings(&cars, "hon", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].make, "Honda");
    }

    #[test]
    fn price_cap_composes_with_make() {
        let cars = [
            listing("Honda", 10_000.0),
            listing("Honda", 25_000.0),
            listing("Tesla", 9_000.0),
        ];
        let hits = filter_listings(&cars, "honda", Some(15_000.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].price, 10_000.0);
    }
}
