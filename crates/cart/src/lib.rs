//! PocketMarket Cart - cart state container.
//!
//! Holds the canonical in-memory list of cart lines and mirrors every change
//! to a single key in on-device storage. UI collaborators hold a cheaply
//! cloneable [`CartStore`] handle, call its three mutation operations and
//! read or subscribe to the current product list.
//!
//! # Architecture
//!
//! - [`store`] - the state machine: mutate in memory, persist the full
//!   snapshot, then publish it to subscribers, in that order
//! - [`storage`] - the key-value seam ([`CartStorage`]) with file-backed and
//!   in-memory backends
//! - [`config`] - storage key namespace and data directory, loaded from the
//!   environment
//!
//! The persisted mirror is a convenience cache for a single local session.
//! Read failures fall back to an empty cart and write failures are logged at
//! warning level; the in-memory state stays authoritative either way.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::StorageError;
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::{CartStore, ListenerId};
