//! Key-value storage seam for the cart.
//!
//! The cart is persisted as one string value under one namespaced key.
//! Backends only move opaque strings; serialization stays in the store.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::error::StorageError;

/// On-device key-value storage used to mirror the cart between sessions.
///
/// A `set` must be atomic from the caller's point of view: a subsequent read
/// sees either the previous value or the new one, never a partial write.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
