use leptos::prelude::*;

use crate::components::toast::ToastContext;
#[cfg(feature = "hydrate")]
use crate::components::toast::ToastLevel;
use crate::session::use_session;

/// Review submission form. Unauthenticated submits no-op with a toast
/// instead of erroring; the author identity comes from the session token
/// server-side.
#[component]
pub fn ReviewForm<F>(provider_id: String, on_submitted: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    #[allow(unused_variables)]
    let session = use_session();
    #[allow(unused_variables)]
    let toasts = use_context::<ToastContext>();

    let (title, setTitle) = signal(String::new());
    let (comment, setComment) = signal(String::new());
    let (rating, setRating) = signal(5u8);
    #[allow(unused_variables)]
    let (submitting, setSubmitting) = signal(false);

    #[allow(unused_variables)]
    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use carlot_types::NewReview;
            use wasm_bindgen_futures::spawn_local;

            if !session.is_authenticated() {
                if let Some(toasts) = toasts {
                    toasts.push("Sign in to write a review".into(), ToastLevel::Warning);
                }
                return;
            }

            let review = NewReview {
                title: title.get_untracked(),
                comment: comment.get_untracked(),
                rating: rating.get_untracked(),
            };
            let providerId = provider_id.clone();
            let onSubmitted = on_submitted.clone();
            setSubmitting.set(true);
            spawn_local(async move {
                match crate::api::submit_review(&providerId, &review).await {
                    Ok(_) => {
                        setTitle.set(String::new());
                        setComment.set(String::new());
                        setRating.set(5);
                        if let Some(toasts) = toasts {
                            toasts.push("Review posted".into(), ToastLevel::Success);
                        }
                        onSubmitted();
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
                setSubmitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&provider_id, &on_submitted);
        }
    };

    view! {
        <form class="review-form" on:submit=handleSubmit>
            <div class="form-group">
                <label for="review-title">"Title"</label>
                <input
                    type="text"
                    id="review-title"
                    placeholder="Summarize your experience"
                    prop:value=title
                    on:input=move |ev| setTitle.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="review-comment">"Comment"</label>
                <textarea
                    id="review-comment"
                    placeholder="How did it go?"
                    prop:value=comment
                    on:input=move |ev| setComment.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label for="review-rating">"Rating"</label>
                <select
                    id="review-rating"
                    on:change=move |ev| {
                        setRating.set(event_target_value(&ev).parse().unwrap_or(5));
                    }
                >
                    {(carlot_types::MIN_RATING..=carlot_types::MAX_RATING)
                        .rev()
                        .map(|n| {
                            view! {
                                <option value=n.to_string() selected=move || rating.get() == n>
                                    {"\u{2605}".repeat(n as usize)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Posting..." } else { "Post review" }}
            </button>
        </form>
    }
}
