use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"C"</div>
                <span class="brand-text">"Carlot"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/">
                        <span class="nav-icon">"\u{2302}"</span>
                        <span>"Home"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <a href="/cars">
                        <span class="nav-icon">"\u{26FD}"</span>
                        <span>"Cars"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <a href="/services">
                        <span class="nav-icon">"\u{2699}"</span>
                        <span>"Services"</span>
                    </a>
                </li>
            </ul>
            <div class="nav-session">
                {move || {
                    if session.is_authenticated() {
                        let name = session.user().map(|u| u.name).unwrap_or_default();
                        view! {
                            <a href="/profile" class="nav-user">{name}</a>
                            <button
                                class="btn btn-ghost btn-sm"
                                on:click=move |_| session.logout()
                            >
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href="/login" class="nav-user">"Sign in"</a>
                            <a href="/register" class="nav-user">"Register"</a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
