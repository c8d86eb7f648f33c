//! Cookie-Based JWT Sessions
//!
//! Authentication infrastructure for the Cookiteer API: signing and
//! verifying the session token, moving it through the `token` cookie, and
//! the ownership check gating identity-scoped routes.
//!
//! # Module Structure
//!
//! - [`auth::jwt`](crate::auth::jwt) - session token codec (HS256 signing and verification)
//! - [`auth::cookie`](crate::auth::cookie) - session cookie construction with configured attributes
//! - [`auth::middleware`](crate::auth::middleware) - session gate extractor and ownership guard
//!
//! # Flow
//!
//! Sign-in (`POST /api/v1/jwt`) signs the asserted identity into a token
//! valid for six hours and sets it as an `HttpOnly` cookie. Protected
//! handlers take the [`middleware::SessionUser`] extractor, which verifies
//! the cookie and exposes the claims; owner-scoped handlers then call
//! [`middleware::authorize`] against the identity named in the query.
//!
//! The token is stateless - logout clears the cookie client-side with the
//! same attribute set; nothing is revoked server-side.

/// Session token signing and verification.
pub mod jwt;
/// Session gate extractor and ownership guard for protected routes.
pub mod middleware;

/// Session cookie construction.
pub mod cookie;

pub use jwt::{AuthService, VerifyError};
pub use middleware::{authorize, SessionUser};
