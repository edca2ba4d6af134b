//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// A registered user
///
/// Only the password hash is kept; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, normalized login identifier
    pub email: Email,
    pub hashed_password: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, hashed_password: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            hashed_password,
            created_at: now,
            updated_at: now,
        }
    }
}
