//! Chirps Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::ChirpConfig;
use crate::domain::repository::ChirpRepository;
use crate::presentation::handlers::{self, ChirpAppState};

/// Routes open to anonymous callers
pub fn chirps_router<R>(repo: Arc<R>, config: Arc<ChirpConfig>) -> Router
where
    R: ChirpRepository + Clone + Send + Sync + 'static,
{
    let state = ChirpAppState { repo, config };

    Router::new()
        .route("/validate_chirp", post(handlers::validate_chirp::<R>))
        .route("/chirps/{chirp_id}", get(handlers::get_chirp::<R>))
        .with_state(state)
}

/// Routes that need an authenticated caller
///
/// The caller must layer an authentication middleware on top that inserts
/// the caller's `UserId` into request extensions.
pub fn chirps_protected_router<R>(repo: Arc<R>, config: Arc<ChirpConfig>) -> Router
where
    R: ChirpRepository + Clone + Send + Sync + 'static,
{
    let state = ChirpAppState { repo, config };

    Router::new()
        .route("/chirps", post(handlers::create_chirp::<R>))
        .with_state(state)
}
