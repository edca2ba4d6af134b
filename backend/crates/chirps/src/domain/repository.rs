//! Repository Traits
//!
//! Interfaces for chirp persistence. Implementation is in infrastructure layer.

use kernel::id::ChirpId;

use crate::domain::entities::Chirp;
use crate::error::ChirpResult;

/// Chirp repository trait
#[trait_variant::make(ChirpRepository: Send)]
pub trait LocalChirpRepository {
    /// Store a new chirp
    async fn create(&self, chirp: &Chirp) -> ChirpResult<()>;

    /// Find a single chirp by ID
    async fn find_by_id(&self, chirp_id: &ChirpId) -> ChirpResult<Option<Chirp>>;
}
