//! # Ripple Shared
//!
//! Types crossing the core/presentation boundary: view-models going out,
//! user intents coming in.

pub mod dto;
pub mod intent;

pub use intent::Intent;
