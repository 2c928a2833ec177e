use carlot_types::{Review, ServiceOffering};
use leptos::prelude::*;

use crate::components::car_card::format_price;
use crate::components::review_form::ReviewForm;
use crate::components::toast::ToastContext;
#[cfg(feature = "hydrate")]
use crate::components::toast::ToastLevel;
use crate::session::use_session;

#[component]
pub fn ServiceCard(offering: ServiceOffering) -> impl IntoView {
    let provider = offering.provider.clone();
    let providerId = provider.id.clone();

    #[allow(unused_variables)]
    let (reviews, setReviews) = signal(Option::<Result<Vec<Review>, String>>::None);
    let (reviewsOpen, setReviewsOpen) = signal(false);

    let fetchId = providerId.clone();
    let fetchReviews = move || {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;
            let providerId = fetchId.clone();
            spawn_local(async move {
                let result = crate::api::fetch_provider_reviews(&providerId)
                    .await
                    .map_err(|e| e.message().to_string());
                setReviews.set(Some(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &fetchId;
        }
    };

    let toggleReviews = {
        let fetchReviews = fetchReviews.clone();
        move |_| {
            let opening = !reviewsOpen.get();
            setReviewsOpen.set(opening);
            // Lazy load on first open; afterwards the cached list stands
            // until a submission refreshes it.
            if opening && reviews.get().is_none() {
                fetchReviews();
            }
        }
    };

    let price = format_price(offering.price);
    let rating = format!("\u{2605} {:.1} ({})", provider.rating, provider.review_count);

    view! {
        <div class="service-card card">
            <div class="service-header">
                <strong class="service-name">{offering.name.clone()}</strong>
                <span class="service-price">{price}</span>
            </div>
            <div class="service-meta">
                <span>{offering.duration.clone()}</span>
                <span>{offering.category.clone()}</span>
            </div>
            <p class="service-description">{offering.description.clone()}</p>
            <div class="provider-row">
                <img class="provider-image" src=provider.image.clone() alt=provider.name.clone() />
                <div>
                    <div class="provider-name">
                        {provider.name.clone()}
                        {provider.verified.then(|| view! { <span class="provider-verified">"\u{2713}"</span> })}
                    </div>
                    <div class="provider-rating">{rating} " \u{00B7} " {provider.location.clone()}</div>
                </div>
            </div>

            <div class="service-reviews-toggle">
                <button class="btn btn-ghost btn-sm" on:click=toggleReviews>
                    {move || if reviewsOpen.get() { "Hide reviews" } else { "Show reviews" }}
                </button>
            </div>

            {move || {
                if !reviewsOpen.get() {
                    return view! { <div></div> }.into_any();
                }
                let refresh = fetchReviews.clone();
                let providerId = providerId.clone();
                view! {
                    <div class="service-reviews">
                        <ReviewList reviews=reviews set_reviews=setReviews />
                        <ReviewForm provider_id=providerId on_submitted=refresh />
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn ReviewList(
    reviews: ReadSignal<Option<Result<Vec<Review>, String>>>,
    set_reviews: WriteSignal<Option<Result<Vec<Review>, String>>>,
) -> impl IntoView {
    #[allow(unused_variables)]
    let session = use_session();
    #[allow(unused_variables)]
    let toasts = use_context::<ToastContext>();

    // helpful / report share the same shape: gate on auth, call the
    // endpoint, splice the updated review back into the list.
    #[allow(unused_variables)]
    let act = move |reviewId: String, report: bool| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;
            if !session.is_authenticated() {
                if let Some(toasts) = toasts {
                    toasts.push("Sign in to rate reviews".into(), ToastLevel::Warning);
                }
                return;
            }
            spawn_local(async move {
                let result = if report {
                    crate::api::report_review(&reviewId).await
                } else {
                    crate::api::mark_review_helpful(&reviewId).await
                };
                match result {
                    Ok(updated) => {
                        set_reviews.update(|state| {
                            if let Some(Ok(list)) = state {
                                if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
                                    *slot = updated;
                                }
                            }
                        });
                    }
                    Err(crate::api::FetchError::Unauthorized(message)) => {
                        if let Some(toasts) = toasts {
                            toasts.push(message, ToastLevel::Error);
                        }
                        session.logout();
                    }
                    Err(err) => {
                        if let Some(toasts) = toasts {
                            toasts.push(err.message().to_string(), ToastLevel::Error);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (reviewId, report);
        }
    };

    view! {
        {move || {
            let act = act.clone();
            match reviews.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading reviews..."
                    </div>
                }
                    .into_any(),
                Some(Err(e)) => view! {
                    <p class="review-error">"Failed to load reviews: " {e}</p>
                }
                    .into_any(),
                Some(Ok(list)) => {
                    if list.is_empty() {
                        view! { <p class="review-empty">"No reviews yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="review-list">
                                {list
                                    .into_iter()
                                    .map(|review| {
                                        let act = act.clone();
                                        view! { <ReviewRow review=review on_act=act /> }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            }
        }}
    }
}

#[component]
fn ReviewRow<F>(review: Review, on_act: F) -> impl IntoView
where
    F: Fn(String, bool) + Clone + 'static,
{
    let stars = "\u{2605}".repeat(review.rating as usize);
    let helpfulId = review.id.clone();
    let helpfulAction = on_act.clone();
    let reportId = review.id.clone();
    let reportAction = on_act;

    view! {
        <li class="review-row">
            <div class="review-head">
                <span class="review-stars">{stars}</span>
                <strong>{review.title.clone()}</strong>
                {review.reported.then(|| view! { <span class="review-flag">"reported"</span> })}
            </div>
            <p class="review-comment">{review.comment.clone()}</p>
            <div class="review-foot">
                <span class="review-author">{review.author.name.clone()}</span>
                <button
                    class="btn btn-ghost btn-sm"
                    on:click=move |_| helpfulAction(helpfulId.clone(), false)
                >
                    {format!("Helpful ({})", review.helpful_count)}
                </button>
                <button
                    class="btn btn-ghost btn-sm"
                    on:click=move |_| reportAction(reportId.clone(), true)
                >
                    "Report"
                </button>
            </div>
        </li>
    }
}
