//! Storage layer - settings repositories

pub mod local_cache;
pub mod memory;

pub use local_cache::{LocalCacheRepository, DEFAULT_KEY_PREFIX};
pub use memory::InMemoryRepository;
