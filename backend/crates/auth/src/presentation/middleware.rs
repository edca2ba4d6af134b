//! Auth Middleware
//!
//! Bearer authentication for protected routes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::bearer_from_headers;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware that requires a valid bearer token
///
/// On success the caller's `kernel::id::UserId` is inserted into request
/// extensions. Any extraction or validation failure is a 401.
pub async fn require_bearer(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_from_headers(req.headers())?;

    let user_id = CheckSessionUseCase::new(config).execute(token)?;
    tracing::debug!(user_id = %user_id, "Authenticated request");

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
