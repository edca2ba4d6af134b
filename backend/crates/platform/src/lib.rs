//! Platform Crate - Authentication Core
//!
//! Stateless building blocks shared by the HTTP crates:
//! - Password hashing (Argon2id)
//! - Signed, expiring session tokens (JWT HS256)
//! - Bearer token extraction from `Authorization` headers
//! - Random secret generation
//!
//! Everything here is a pure function of its inputs (plus OS randomness),
//! does no I/O and does not log. Callers decide how errors surface.

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
