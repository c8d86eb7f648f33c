use crate::auth::cookie::SESSION_COOKIE;
use crate::types::{AppError, Claims, Result};
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

/// Session gate extractor.
///
/// Pulls the session token out of the `token` cookie, verifies it, and hands
/// the decoded claims to the handler. Any failure - missing cookie, bad
/// signature, expiry, garbage value - is a uniform 401; the failure kind is
/// only logged.
pub struct SessionUser {
    pub claims: Claims,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .unwrap(); // CookieJar extraction is infallible

        let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthenticated)?;

        let claims = state.auth.verify(cookie.value()).map_err(|e| {
            tracing::debug!(reason = %e, "session token rejected");
            AppError::Unauthenticated
        })?;

        Ok(SessionUser { claims })
    }
}

/// Ownership guard.
///
/// A caller may only touch resources tied to the identity their session
/// asserts. Exact string equality - no case folding, no trimming.
pub fn authorize(session_email: &str, claimed_email: &str) -> Result<()> {
    if session_email == claimed_email {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
