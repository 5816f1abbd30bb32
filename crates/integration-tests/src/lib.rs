//! Integration tests for PocketMarket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pocketmarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart store over the file storage backend: session
//!   round-trips, on-disk encoding, degraded-storage behavior
