//! Infrastructure Layer
//!
//! Storage implementations of the domain repository traits.

pub mod memory;

pub use memory::InMemoryChirpRepository;
