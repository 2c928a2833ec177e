use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::cars::CarsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::services::ServicesPage;
use crate::session::SessionProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/carlot-console.css" />
        <Title text="Carlot" />
        <ToastProvider>
            <SessionProvider>
                <Router>
                    <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                        <Route path=StaticSegment("") view=HomeView />
                        <Route path=StaticSegment("cars") view=CarsView />
                        <Route path=StaticSegment("services") view=ServicesView />
                        <Route path=StaticSegment("profile") view=ProfileView />
                        <Route path=StaticSegment("login") view=LoginPage />
                        <Route path=StaticSegment("register") view=RegisterPage />
                    </Routes>
                </Router>
            </SessionProvider>
        </ToastProvider>
    }
}

#[component]
fn HomeView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <HomePage />
            </main>
        </div>
    }
}

#[component]
fn CarsView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <CarsPage />
            </main>
        </div>
    }
}

#[component]
fn ServicesView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <ServicesPage />
            </main>
        </div>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <ProfilePage />
            </main>
        </div>
    }
}
