//! # Cookiteer Server
//!
//! REST backend for the Cookiteer community food-donation platform:
//! CRUD over two document collections (food listings, food requests) with
//! cookie-based JWT sessions gating the owner-scoped routes.
//!
//! ## Overview
//!
//! Every endpoint is an independent request/response handler that performs
//! at most one or two document-store calls. The authentication core is the
//! recurring concern:
//!
//! 1. **Token codec** ([`auth::jwt`]) - signs an asserted identity into a
//!    six-hour HS256 session token and verifies inbound tokens.
//! 2. **Session gate** ([`auth::middleware::SessionUser`]) - extracts the
//!    token from the `token` cookie and rejects the request with 401 when
//!    it is missing or fails verification.
//! 3. **Ownership guard** ([`auth::middleware::authorize`]) - compares the
//!    query-supplied identity to the session identity, 403 on mismatch.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use cookiteer::{api, AppState, AuthService, Config, StoreProvider};
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let store = StoreProvider::from_env().create_store().await?;
//! let auth = Arc::new(AuthService::new(
//!     config.auth.jwt_secret.clone(),
//!     config.auth.token_validity_hours,
//! ));
//!
//! let state = AppState { config: Arc::new(config), store, auth };
//! let app = api::routes::app(state);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - session token codec, session gate, ownership guard
//! - [`db`] - document store abstraction (MongoDB, in-memory)
//! - [`types`] - domain records, store outcomes, error handling
//! - [`utils`] - environment-driven configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Cookie-based JWT session handling.
pub mod auth;
/// Document store clients (MongoDB, in-memory).
pub mod db;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use auth::jwt::AuthService;
pub use db::{DocumentStore, MemoryStore, MongoStore, StoreProvider};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Process configuration, resolved once at startup
    pub config: Arc<Config>,
    /// Document store handle
    pub store: Arc<dyn DocumentStore>,
    /// Session token codec
    pub auth: Arc<AuthService>,
}
