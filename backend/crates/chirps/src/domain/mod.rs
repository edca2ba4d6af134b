//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Chirp)
//! - Domain services (length check and denylist masking)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;

pub use entities::Chirp;
pub use repository::ChirpRepository;
pub use services::{ContentError, clean_body};
