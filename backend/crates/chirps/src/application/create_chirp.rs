//! Create Chirp Use Case
//!
//! Cleans a submitted body and stores it under the caller's id.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::ChirpConfig;
use crate::domain::entities::Chirp;
use crate::domain::repository::ChirpRepository;
use crate::domain::services::clean_body;
use crate::error::ChirpResult;

pub struct CreateChirpInput {
    /// Authenticated author
    pub user_id: UserId,
    /// Raw body as submitted
    pub body: String,
}

pub struct CreateChirpUseCase<R>
where
    R: ChirpRepository,
{
    chirp_repo: Arc<R>,
    config: Arc<ChirpConfig>,
}

impl<R> CreateChirpUseCase<R>
where
    R: ChirpRepository,
{
    pub fn new(chirp_repo: Arc<R>, config: Arc<ChirpConfig>) -> Self {
        Self { chirp_repo, config }
    }

    pub async fn execute(&self, input: CreateChirpInput) -> ChirpResult<Chirp> {
        let body = clean_body(&input.body, self.config.max_length, &self.config.denylist)?;

        let chirp = Chirp::new(input.user_id, body);
        self.chirp_repo.create(&chirp).await?;

        tracing::info!(
            chirp_id = %chirp.chirp_id,
            user_id = %chirp.user_id,
            "Chirp created"
        );

        Ok(chirp)
    }
}
