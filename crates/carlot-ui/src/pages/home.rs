use carlot_types::{CarListing, Condition, ListingStatus, Seller, Transmission};
use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::hooks::{use_car_listings, FetchOptions};

/// Static subset shown on the landing page. The hook runs in preview mode,
/// so none of this triggers a network fetch.
fn preview_listings() -> Vec<CarListing> {
    let dealer = Seller {
        id: "seller-harbor".into(),
        name: "Harbor Motors".into(),
        email: "sales@harbormotors.example".into(),
    };
    vec![
        CarListing {
            id: "preview-corolla".into(),
            make: "Toyota".into(),
            model: "Corolla".into(),
            year: 2022,
            price: 21_400.0,
            mileage: 18_000,
            condition: Condition::Certified,
            transmission: Transmission::Automatic,
            status: ListingStatus::Active,
            images: vec!["/assets/cars/car-corolla-22.jpg".into()],
            description: String::new(),
            features: vec![],
            seller: dealer.clone(),
        },
        CarListing {
            id: "preview-model3".into(),
            make: "Tesla".into(),
            model: "Model 3".into(),
            year: 2024,
            price: 38_900.0,
            mileage: 2_100,
            condition: Condition::New,
            transmission: Transmission::Automatic,
            status: ListingStatus::Active,
            images: vec!["/assets/cars/car-model3-24.jpg".into()],
            description: String::new(),
            features: vec![],
            seller: dealer.clone(),
        },
        CarListing {
            id: "preview-golf".into(),
            make: "Volkswagen".into(),
            model: "Golf".into(),
            year: 2018,
            price: 12_900.0,
            mileage: 74_500,
            condition: Condition::Used,
            transmission: Transmission::Manual,
            status: ListingStatus::Active,
            images: vec!["/assets/cars/car-golf-18.jpg".into()],
            description: String::new(),
            features: vec![],
            seller: dealer,
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let preview = use_car_listings(FetchOptions {
        initial: Some(preview_listings()),
        preview: true,
    });
    let state = preview.0;

    view! {
        <div class="dashboard-header">
            <h1>"Find your next car"</h1>
            <p class="subtitle">"Browse listings and book services from local garages"</p>
        </div>
        <div class="home-actions">
            <a class="btn btn-primary" href="/cars">"Browse cars"</a>
            <a class="btn btn-ghost" href="/services">"Book a service"</a>
        </div>
        <div class="car-grid">
            {move || {
                state
                    .filtered
                    .get()
                    .into_iter()
                    .map(|car| view! { <CarCard car=car /> })
                    .collect_view()
            }}
        </div>
    }
}
