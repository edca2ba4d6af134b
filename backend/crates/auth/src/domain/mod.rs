//! Domain Layer
//!
//! Users, email validation and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::User;
pub use repository::UserRepository;
pub use value_object::{Email, EmailError};
