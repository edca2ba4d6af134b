//! In-Memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    /// Email uniqueness index
    by_email: HashMap<Email, UserId>,
}

/// Process-local user store
///
/// Clones share the same underlying maps.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Users>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if users.by_email.contains_key(&user.email) {
            return Err(AuthError::EmailTaken);
        }
        if users.by_id.contains_key(&user.user_id) {
            return Err(AuthError::Internal(format!(
                "duplicate user id {}",
                user.user_id
            )));
        }

        users.by_email.insert(user.email.clone(), user.user_id);
        users.by_id.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;

        Ok(users
            .by_email
            .get(email)
            .and_then(|user_id| users.by_id.get(user_id))
            .cloned())
    }
}
