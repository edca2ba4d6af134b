//! Get Chirp Use Case

use std::sync::Arc;

use kernel::id::ChirpId;

use crate::domain::entities::Chirp;
use crate::domain::repository::ChirpRepository;
use crate::error::{ChirpError, ChirpResult};

pub struct GetChirpUseCase<R>
where
    R: ChirpRepository,
{
    chirp_repo: Arc<R>,
}

impl<R> GetChirpUseCase<R>
where
    R: ChirpRepository,
{
    pub fn new(chirp_repo: Arc<R>) -> Self {
        Self { chirp_repo }
    }

    pub async fn execute(&self, chirp_id: &ChirpId) -> ChirpResult<Chirp> {
        self.chirp_repo
            .find_by_id(chirp_id)
            .await?
            .ok_or(ChirpError::NotFound)
    }
}
