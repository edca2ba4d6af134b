//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors render through
//! the crates' own error types.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use auth::{AuthConfig, InMemoryUserRepository, auth_router, require_bearer};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
    routing::get,
};
use chirps::{ChirpConfig, InMemoryChirpRepository, chirps_protected_router, chirps_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,chirps=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = match env::var("JWT_SECRET") {
        Ok(secret) if !secret.trim().is_empty() => AuthConfig::new(secret),
        _ if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random development secret");
            AuthConfig::development()
        }
        _ => anyhow::bail!("JWT_SECRET must be set in production"),
    };
    let auth_config = Arc::new(auth_config);

    // Chirp configuration
    let chirp_config = match env::var("CHIRP_DENYLIST") {
        Ok(csv) => ChirpConfig::default().with_denylist_csv(&csv),
        Err(_) => ChirpConfig::default(),
    };
    tracing::info!(
        max_length = chirp_config.max_length,
        denylist_size = chirp_config.denylist.len(),
        "Chirp content rules loaded"
    );
    let chirp_config = Arc::new(chirp_config);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8080,http://127.0.0.1:8080".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = app_router(auth_config, chirp_config)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a valid port number")?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// All routes under `/api`, backed by fresh in-memory stores
///
/// `POST /api/chirps` sits behind the bearer middleware; everything else
/// is open.
fn app_router(auth_config: Arc<AuthConfig>, chirp_config: Arc<ChirpConfig>) -> Router {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let chirp_repo = Arc::new(InMemoryChirpRepository::new());

    let protected = chirps_protected_router(chirp_repo.clone(), chirp_config.clone()).route_layer(
        middleware::from_fn_with_state(auth_config.clone(), require_bearer),
    );

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(auth_router(user_repo, auth_config))
        .merge(chirps_router(chirp_repo, chirp_config))
        .merge(protected);

    Router::new().nest("/api", api)
}

/// GET /api/healthz
async fn healthz() -> &'static str {
    "OK"
}
