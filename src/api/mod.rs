//! HTTP API Handlers and Routes
//!
//! This module provides the REST layer for Cookiteer, built on the Axum web
//! framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Session (`/api/v1`)
//! - `POST /api/v1/jwt` - Issue a session token and set the `token` cookie
//! - `POST /api/v1/logout` - Clear the session cookie
//!
//! ## Food Listings (`/api/v1`)
//! - `GET /api/v1/foods` - Browse listings (category/search/sort)
//! - `GET /api/v1/foods/{id}` - Fetch one listing
//! - `POST /api/v1/add-food` - Create a listing
//! - `PATCH /api/v1/update-food/{id}` - Partially update a listing
//! - `DELETE /api/v1/foods/{id}` - Delete a listing
//! - `GET /api/v1/manage-food` - Caller's own listings *(session + ownership)*
//!
//! ## Food Requests (`/api/v1`)
//! - `GET /api/v1/food-requests` - Caller's own requests *(session + ownership)*
//! - `POST /api/v1/food-requests` - Submit a request (409 on duplicate)
//! - `DELETE /api/v1/food-requests/{id}` - Withdraw a request
//! - `GET /api/v1/manage-food-requests` - Requests against the caller's listing *(session + ownership)*
//! - `PATCH /api/v1/manage-food-requests` - Mark delivered, remove the listing
//!
//! # Authentication
//!
//! Owner-scoped endpoints require a valid session token in the `token`
//! cookie, set by `POST /api/v1/jwt`, and an `email` query parameter that
//! matches the session identity exactly.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
