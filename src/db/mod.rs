//! Document store clients.
//!
//! This module provides the persistence abstraction for the two food
//! collections:
//! - **MongoDB**: the deployment backend (`foodsCollection`,
//!   `requestsCollection` in the configured database)
//! - **Memory**: an ephemeral backend for development runs and the
//!   integration suites
//!
//! Select a backend via [`StoreProvider`], usually through
//! `StoreProvider::from_env()` at startup.

// Store abstraction layer
pub mod traits;

// Backend implementations
pub mod memory;
pub mod mongo;

// Re-exports
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use traits::{DocumentStore, StoreProvider};
