use carlot_types::{CarListing, Condition, ListingStatus};
use leptos::prelude::*;

pub fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_mileage(mileage: u32) -> String {
    if mileage >= 1000 {
        format!("{:.1}k mi", mileage as f64 / 1000.0)
    } else {
        format!("{mileage} mi")
    }
}

fn condition_label(condition: Condition) -> &'static str {
    match condition {
        Condition::New => "New",
        Condition::Used => "Used",
        Condition::Certified => "Certified",
    }
}

fn status_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "status-active",
        ListingStatus::Sold => "status-sold",
        ListingStatus::Pending => "status-pending",
        ListingStatus::Draft => "status-draft",
    }
}

#[component]
pub fn CarCard(car: CarListing) -> impl IntoView {
    let image = car
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| carlot_types::PLACEHOLDER_CAR_IMAGE.to_string());
    let title = format!("{} {} {}", car.year, car.make, car.model);
    let price = format_price(car.price);
    let mileage = format_mileage(car.mileage);
    let condition = condition_label(car.condition);
    let statusCls = status_class(car.status);
    let features = car.features.clone();

    view! {
        <div class="car-card card">
            <img class="car-image" src=image alt=title.clone() />
            <div class="car-header">
                <strong class="car-title">{title}</strong>
                <span class=format!("status-badge {statusCls}")></span>
            </div>
            <div class="car-price">{price}</div>
            <div class="car-meta">
                <span>{mileage}</span>
                <span>{condition}</span>
            </div>
            {if !features.is_empty() {
                view! { <div class="car-features">{features.join(" \u{00B7} ")}</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
            <div class="car-seller">{car.seller.name.clone()}</div>
        </div>
    }
}
