//! Contract layer - public API for in-process consumers
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use error::{SettingsError, PERSISTENCE_FAILED_MESSAGE};
pub use model::{CatalogChange, Setting};
