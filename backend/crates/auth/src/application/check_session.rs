//! Check Session Use Case
//!
//! Resolves the caller behind a bearer token.

use std::sync::Arc;

use kernel::id::UserId;
use platform::token::validate_token;

use crate::application::config::AuthConfig;
use crate::error::AuthResult;

/// Check session use case
///
/// Tokens are stateless, so no repository is consulted.
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Return the user id carried by a valid token
    pub fn execute(&self, token: &str) -> AuthResult<UserId> {
        let subject = validate_token(token, &self.config.jwt_secret)?;

        Ok(UserId::from_uuid(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use chrono::Duration;
    use platform::token::{TokenError, issue_token};

    fn use_case() -> CheckSessionUseCase {
        CheckSessionUseCase::new(Arc::new(AuthConfig::new("session-secret")))
    }

    #[test]
    fn test_valid_token() {
        let user_id = UserId::new();
        let token =
            issue_token(user_id.into_uuid(), "session-secret", Duration::minutes(5)).unwrap();

        assert_eq!(use_case().execute(&token).unwrap(), user_id);
    }

    #[test]
    fn test_garbage_token() {
        let err = use_case().execute("not-a-token").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(TokenError::Malformed)));
    }

    #[test]
    fn test_foreign_secret() {
        let token = issue_token(UserId::new().into_uuid(), "other", Duration::minutes(5)).unwrap();

        let err = use_case().execute(&token).unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidToken(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token() {
        let token = issue_token(
            UserId::new().into_uuid(),
            "session-secret",
            Duration::seconds(-1),
        )
        .unwrap();

        let err = use_case().execute(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(TokenError::Expired)));
    }
}
