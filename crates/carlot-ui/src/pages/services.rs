use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::hooks::{use_service_offerings, FetchOptions};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let offerings = use_service_offerings(FetchOptions::default());
    let state = offerings.0;

    view! {
        <div class="dashboard-header">
            <h1>"Services"</h1>
            <p class="subtitle">"Book maintenance and detailing from vetted providers"</p>
        </div>
        {move || {
            if state.loading.get() {
                return view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading services..."
                    </div>
                }
                    .into_any();
            }
            if let Some(error) = state.error.get() {
                return view! {
                    <div class="card">
                        <p class="login-error">{error}</p>
                        <button class="btn btn-ghost btn-sm" on:click=move |_| offerings.fetch()>
                            "Try again"
                        </button>
                    </div>
                }
                    .into_any();
            }
            let services = state.filtered.get();
            if services.is_empty() {
                return view! {
                    <div class="card">
                        <p>"No services available right now."</p>
                    </div>
                }
                    .into_any();
            }
            view! {
                <div class="service-list">
                    {services
                        .into_iter()
                        .map(|offering| view! { <ServiceCard offering=offering /> })
                        .collect_view()}
                </div>
            }
                .into_any()
        }}
    }
}
