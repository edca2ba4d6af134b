//! Value Objects

pub mod email;

pub use email::{Email, EmailError};
