//! Sign In Use Case
//!
//! Verifies credentials and issues a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::issue_token;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
    /// Requested token lifetime, resolved by [`AuthConfig::token_ttl`]
    pub expires_in_seconds: Option<i64>,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    /// Signed bearer token for subsequent requests
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed email cannot belong to anyone.
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new_unchecked(input.password);
        if !user.hashed_password.verify(&password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = self.config.token_ttl(input.expires_in_seconds);
        let token = issue_token(user.user_id.into_uuid(), &self.config.jwt_secret, ttl)?;

        tracing::info!(
            user_id = %user.user_id,
            ttl_secs = ttl.num_seconds(),
            "User signed in"
        );

        Ok(SignInOutput { user, token })
    }
}
