//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by resource.

/// Session handlers (sign-in, logout).
pub mod auth;
/// Food listing CRUD and management handlers.
pub mod foods;
/// Food request CRUD and management handlers.
pub mod requests;
