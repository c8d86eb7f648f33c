//! Session API handlers
//!
//! Sign-in signs the asserted identity into a six-hour session token and
//! sets it as an `HttpOnly` cookie; logout clears the cookie with the same
//! attribute set. Nothing is persisted server-side.

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::types::Result;
use crate::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

/// Identity asserted by the upstream client at sign-in.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Some clients post the identity under `user` instead of `email`.
    #[serde(alias = "user")]
    pub email: String,
}

/// Issue a session token and set the session cookie
///
/// POST /api/v1/jwt
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<TokenRequest>,
) -> Result<(CookieJar, Json<serde_json::Value>)> {
    let token = state.auth.issue(&payload.email)?;

    tracing::debug!(email = %payload.email, "session token issued");

    let jar = jar.add(session_cookie(token, &state.config.cookie));
    Ok((jar, Json(serde_json::json!({ "success": true }))))
}

/// Clear the session cookie
///
/// POST /api/v1/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.remove(clear_session_cookie(&state.config.cookie));

    tracing::debug!("session cookie cleared");

    (jar, Json(serde_json::json!({ "logout": true })))
}
