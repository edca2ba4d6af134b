//! Presentation Layer
//!
//! HTTP handlers, DTOs and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ChirpAppState;
pub use router::{chirps_protected_router, chirps_router};
