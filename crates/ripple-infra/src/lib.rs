//! # Ripple Infrastructure
//!
//! Concrete implementations of the ports defined in `ripple-core`.

pub mod store;

pub use store::{InMemoryStore, JsonFileStore};
