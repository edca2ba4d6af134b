//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/users", post(handlers::create_user::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
