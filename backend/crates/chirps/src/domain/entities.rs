//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{ChirpId, UserId};

/// A stored chirp
///
/// `body` is always the cleaned text, never the raw submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub chirp_id: ChirpId,
    pub user_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    pub fn new(user_id: UserId, body: String) -> Self {
        let now = Utc::now();
        Self {
            chirp_id: ChirpId::new(),
            user_id,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}
