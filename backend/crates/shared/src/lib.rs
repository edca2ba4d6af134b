//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by every Chirpy crate:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Typed identifiers for users and chirps
//!
//! Only things with a consistent meaning across all domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
