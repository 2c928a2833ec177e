use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.login(email.get_untracked(), password.get_untracked());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"C"</div>
                    <h1>"Carlot"</h1>
                    <p>"Sign in to your account"</p>
                </div>

                {move || {
                    session.error().map(|e| view! { <div class="login-error">{e}</div> })
                }}

                <form on:submit=handleSubmit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            required
                            prop:value=email
                            on:input=move |ev| {
                                session.clear_error();
                                setEmail.set(event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || session.pending()>
                        {move || if session.pending() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="login-alt">"No account? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
