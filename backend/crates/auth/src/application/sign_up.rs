//! Sign Up Use Case
//!
//! Registers a new user with an email and password.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let email = Email::new(&input.email)?;

        let password = ClearTextPassword::new(input.password)?;
        let hashed_password = password.hash()?;

        let user = User::new(email, hashed_password);
        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn use_case() -> SignUpUseCase<InMemoryUserRepository> {
        SignUpUseCase::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_sign_up_hashes_password() {
        let user = use_case()
            .execute(SignUpInput {
                email: "Walt@Example.com".into(),
                password: "04234567890".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.email.as_str(), "walt@example.com");
        assert_ne!(user.hashed_password.as_phc_string(), "04234567890");
        assert!(user.hashed_password.as_phc_string().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let use_case = use_case();
        let input = || SignUpInput {
            email: "saul@example.com".into(),
            password: "better-call-saul".into(),
        };

        use_case.execute(input()).await.unwrap();
        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_bad_input() {
        let use_case = use_case();

        let err = use_case
            .execute(SignUpInput {
                email: "not-an-email".into(),
                password: "long enough password".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));

        let err = use_case
            .execute(SignUpInput {
                email: "jesse@example.com".into(),
                password: "short".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }
}
