//! PocketMarket Core - Shared types library.
//!
//! This crate provides the common domain types used across PocketMarket
//! components:
//! - `cart` - Cart state container synchronized to on-device storage
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
