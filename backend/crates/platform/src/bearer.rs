//! Bearer token extraction
//!
//! Parses `Authorization: Bearer <token>` header values.

use axum::http::{HeaderMap, header};
use thiserror::Error;

const BEARER_SCHEME: &str = "Bearer";

/// Error when extracting a bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Authorization header is missing")]
    MissingHeader,

    /// Present, but not of the form `Bearer <token>`
    #[error("Authorization header is malformed")]
    MalformedHeader,

    /// `Bearer` with nothing (or only whitespace) after it
    #[error("Bearer token is empty")]
    EmptyToken,
}

/// Extract the raw token from an `Authorization` header value
///
/// The `Bearer ` prefix is case-sensitive. Whitespace around the token
/// itself is trimmed.
///
/// ## Examples
/// ```rust
/// use platform::bearer::{extract_bearer, BearerError};
///
/// assert_eq!(extract_bearer(Some("Bearer abc.def")), Ok("abc.def"));
/// assert_eq!(extract_bearer(None), Err(BearerError::MissingHeader));
/// assert_eq!(extract_bearer(Some("Bearer   ")), Err(BearerError::EmptyToken));
/// ```
pub fn extract_bearer(header_value: Option<&str>) -> Result<&str, BearerError> {
    let value = header_value.ok_or(BearerError::MissingHeader)?;

    let rest = match value.strip_prefix(BEARER_SCHEME) {
        Some("") => return Err(BearerError::EmptyToken),
        Some(rest) => rest
            .strip_prefix(' ')
            .ok_or(BearerError::MalformedHeader)?,
        None => return Err(BearerError::MalformedHeader),
    };

    let token = rest.trim();
    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(token)
}

/// Extract the bearer token from request headers
///
/// Only the first `Authorization` value is considered. A value that is
/// not visible ASCII counts as malformed.
pub fn bearer_from_headers(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| BearerError::MalformedHeader)?),
        None => None,
    };

    extract_bearer(value)
}
