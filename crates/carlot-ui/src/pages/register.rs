use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    let (name, setName) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.register(
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"C"</div>
                    <h1>"Join Carlot"</h1>
                    <p>"Create an account to list cars and write reviews"</p>
                </div>

                {move || {
                    session.error().map(|e| view! { <div class="login-error">{e}</div> })
                }}

                <form on:submit=handleSubmit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            required
                            prop:value=name
                            on:input=move |ev| setName.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
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
                            placeholder="At least 8 characters"
                            required
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || session.pending()>
                        {move || if session.pending() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="login-alt">"Already have an account? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
