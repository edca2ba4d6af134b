//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, email value object, repository trait
//! - `application/` - Use cases and application services
//! - `infra/` - In-memory repository
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with email + password
//! - Login issuing a signed, expiring bearer token
//! - Bearer middleware that resolves the caller's `UserId`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; plaintext is zeroized on drop
//! - Tokens are stateless HS256 JWTs; there is no revocation
//! - Unknown email and wrong password produce the same error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::middleware::require_bearer;
pub use presentation::router::auth_router;
