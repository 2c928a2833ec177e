use carlot_types::Role;
use leptos::prelude::*;

use crate::session::use_session;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "Buyer",
        Role::Admin => "Administrator",
        Role::ServiceProvider => "Service provider",
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="dashboard-header">
            <h1>"Profile"</h1>
        </div>
        {move || {
            match session.user() {
                Some(user) => {
                    view! {
                        <div class="card profile-card">
                            <div class="card-title">{user.name.clone()}</div>
                            <div class="metric-row">
                                <span class="metric-label">"Email"</span>
                                <span class="metric-value">{user.email.clone()}</span>
                            </div>
                            <div class="metric-row">
                                <span class="metric-label">"Role"</span>
                                <span class="metric-value">{role_label(user.role)}</span>
                            </div>
                            <button class="btn btn-ghost" on:click=move |_| session.logout()>
                                "Sign out"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="card">
                            <p>"You are not signed in. " <a href="/login">"Sign in"</a></p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
