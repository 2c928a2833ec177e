#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug)]
    pub struct Config {
        pub server: ServerConfig,
        pub auth: AuthConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct AuthConfig {
        pub secret: String,
        pub token_ttl_secs: i64,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig {
                    bind: "0.0.0.0".into(),
                    port: 3000,
                },
                auth: AuthConfig {
                    secret: "change-me-on-first-run".into(),
                    token_ttl_secs: 86_400,
                },
            }
        }
    }

    pub fn load(path: &str) -> Config {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        };

        // The token secret and lifetime stay environment-overridable so
        // deployments never have to write secrets into the config file.
        if let Ok(secret) = std::env::var("CARLOT_TOKEN_SECRET") {
            config.auth.secret = secret;
        }
        if let Ok(ttl) = std::env::var("CARLOT_TOKEN_TTL_SECS") {
            match ttl.parse() {
                Ok(ttl) => config.auth.token_ttl_secs = ttl,
                Err(e) => tracing::warn!("ignoring CARLOT_TOKEN_TTL_SECS: {e}"),
            }
        }
        config
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use carlot_api::jwt::JwtService;
    use carlot_api::middleware::auth::AppState;
    use carlot_store::MarketStore;
    use carlot_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}",
        appConfig.server.bind,
        appConfig.server.port
    );

    let appState = AppState {
        store: Arc::new(MarketStore::seeded()),
        jwt: Arc::new(JwtService::new(
            &appConfig.auth.secret,
            appConfig.auth.token_ttl_secs,
        )),
    };

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    // Generate route list from Leptos App
    let routes = generate_route_list(App);

    // REST API sub-router carries its own state; Leptos routes use
    // LeptosOptions as state.
    let apiRouter = carlot_api::api_router(appState);

    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port);
    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
