//! In-Memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::ChirpId;
use tokio::sync::RwLock;

use crate::domain::entities::Chirp;
use crate::domain::repository::ChirpRepository;
use crate::error::{ChirpError, ChirpResult};

/// Process-local chirp store
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryChirpRepository {
    chirps: Arc<RwLock<HashMap<ChirpId, Chirp>>>,
}

impl InMemoryChirpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.chirps.read().await.len()
    }
}

impl ChirpRepository for InMemoryChirpRepository {
    async fn create(&self, chirp: &Chirp) -> ChirpResult<()> {
        let mut chirps = self.chirps.write().await;

        if chirps.contains_key(&chirp.chirp_id) {
            return Err(ChirpError::Internal(format!(
                "duplicate chirp id {}",
                chirp.chirp_id
            )));
        }

        chirps.insert(chirp.chirp_id, chirp.clone());
        Ok(())
    }

    async fn find_by_id(&self, chirp_id: &ChirpId) -> ChirpResult<Option<Chirp>> {
        Ok(self.chirps.read().await.get(chirp_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryChirpRepository::new();
        let chirp = Chirp::new(UserId::new(), "hello".to_string());

        repo.create(&chirp).await.unwrap();

        assert_eq!(repo.find_by_id(&chirp.chirp_id).await.unwrap(), Some(chirp.clone()));
        assert_eq!(repo.find_by_id(&ChirpId::new()).await.unwrap(), None);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryChirpRepository::new();
        let chirp = Chirp::new(UserId::new(), "hello".to_string());

        repo.create(&chirp).await.unwrap();
        assert!(matches!(
            repo.create(&chirp).await,
            Err(ChirpError::Internal(_))
        ));
    }
}
