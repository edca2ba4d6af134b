//! Application Layer - Use Cases
//!
//! Orchestrates the content rules and the chirp repository.

pub mod config;
pub mod create_chirp;
pub mod get_chirp;
pub mod validate_chirp;

pub use config::ChirpConfig;
pub use create_chirp::{CreateChirpInput, CreateChirpUseCase};
pub use get_chirp::GetChirpUseCase;
pub use validate_chirp::ValidateChirpUseCase;
