//! Chirps Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Chirp entity, content rules, repository trait
//! - `application/` - Use cases
//! - `infra/` - In-memory repository
//! - `presentation/` - HTTP handlers
//!
//! Chirp bodies are length-checked and then masked against a denylist.
//! Stored bodies are always the cleaned text.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::ChirpConfig;
pub use domain::services::clean_body;
pub use error::{ChirpError, ChirpResult};
pub use infra::memory::InMemoryChirpRepository;
pub use presentation::router::{chirps_protected_router, chirps_router};
