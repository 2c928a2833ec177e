use carlot_types::SessionUser;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast::{ToastContext, ToastLevel};

/// Durable storage keys. `token` holds the raw bearer string, `user` the
/// serialized session user.
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const USER_STORAGE_KEY: &str = "user";

pub const LOGIN_FALLBACK_ERROR: &str = "Invalid credentials";
pub const REGISTER_FALLBACK_ERROR: &str = "Registration failed";

/// localStorage access, client-only. Server renders see an anonymous
/// session; every variant of failure (no window, storage disabled) reads as
/// an absent value.
pub(crate) mod storage {
    #[cfg(feature = "hydrate")]
    pub fn read(key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    #[cfg(feature = "hydrate")]
    pub fn write(key: &str, value: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn remove(key: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn redirect(path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn read(_key: &str) -> Option<String> {
        None
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn write(_key: &str, _value: &str) {}

    #[cfg(not(feature = "hydrate"))]
    pub fn remove(_key: &str) {}

    #[cfg(not(feature = "hydrate"))]
    pub fn redirect(_path: &str) {}
}

/// Owns the authenticated identity. Pages read it through the context; the
/// three operations here are the only writers of session storage.
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: ReadSignal<Option<SessionUser>>,
    set_user: WriteSignal<Option<SessionUser>>,
    token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    pending: ReadSignal<bool>,
    set_pending: WriteSignal<bool>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn pending(&self) -> bool {
        self.pending.get()
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }

    pub fn login(&self, email: String, password: String) {
        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            let toasts = use_context::<ToastContext>();
            ctx.set_pending.set(true);
            ctx.set_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::api::login(&email, &password).await;
                ctx.finish_auth(result, toasts, "Signed in");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
        }
    }

    pub fn register(&self, name: String, email: String, password: String) {
        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            let toasts = use_context::<ToastContext>();
            ctx.set_pending.set(true);
            ctx.set_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::api::register(&name, &email, &password).await;
                ctx.finish_auth(result, toasts, "Welcome to Carlot");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, email, password);
        }
    }

    /// Clears memory and durable storage unconditionally, then sends the
    /// user back to the home view.
    pub fn logout(&self) {
        self.set_user.set(None);
        self.set_token.set(None);
        self.set_error.set(None);
        storage::remove(TOKEN_STORAGE_KEY);
        storage::remove(USER_STORAGE_KEY);
        storage::redirect("/");
    }

    #[cfg(feature = "hydrate")]
    fn finish_auth(
        &self,
        result: Result<carlot_types::AuthPayload, String>,
        toasts: Option<ToastContext>,
        greeting: &str,
    ) {
        self.set_pending.set(false);
        match result {
            Ok(payload) => {
                storage::write(TOKEN_STORAGE_KEY, &payload.token);
                storage::write(
                    USER_STORAGE_KEY,
                    &serde_json::to_string(&payload.user).unwrap_or_default(),
                );
                self.set_user.set(Some(payload.user));
                self.set_token.set(Some(payload.token));
                if let Some(toasts) = toasts {
                    toasts.push(greeting.to_string(), ToastLevel::Success);
                }
                storage::redirect("/profile");
            }
            Err(message) => {
                self.set_error.set(Some(message.clone()));
                if let Some(toasts) = toasts {
                    toasts.push(message, ToastLevel::Error);
                }
            }
        }
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Provides the session context and rehydrates it from durable storage.
/// Place once near the root, inside the toast provider.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (user, setUser) = signal(Option::<SessionUser>::None);
    let (token, setToken) = signal(Option::<String>::None);
    let (error, setError) = signal(Option::<String>::None);
    let (pending, setPending) = signal(false);

    let ctx = SessionContext {
        user,
        set_user: setUser,
        token,
        set_token: setToken,
        error,
        set_error: setError,
        pending,
        set_pending: setPending,
    };

    #[cfg(feature = "hydrate")]
    {
        if let Some(storedToken) = storage::read(TOKEN_STORAGE_KEY) {
            let storedUser = storage::read(USER_STORAGE_KEY)
                .as_deref()
                .and_then(carlot_types::parse_stored_user);
            match storedUser {
                Some(storedUser) => {
                    setUser.set(Some(storedUser));
                    setToken.set(Some(storedToken));
                }
                // Corrupt stored user: fail safe by logging out fully.
                None => ctx.logout(),
            }
        }
    }

    provide_context(ctx);

    view! { {children()} }
}
