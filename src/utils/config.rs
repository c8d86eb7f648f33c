use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;
use std::env;

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cookie: CookieConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Session token validity window in hours.
    pub token_validity_hours: i64,
}

/// Attributes applied to the session cookie.
///
/// Resolved from the deployment environment because the clear path must
/// mirror the exact attribute set used at set-time, and because a relaxed
/// development setup (plain HTTP, same-origin dev server) needs different
/// flags than a cross-site production deployment.
#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    pub secure: bool,
    pub same_site: SameSite,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()?,
            },
            auth: AuthConfig {
                jwt_secret: env::var("ACCESS_TOKEN_SECRET")?,
                token_validity_hours: env::var("TOKEN_VALIDITY_HOURS")
                    .unwrap_or_else(|_| "6".to_string())
                    .parse()?,
            },
            cookie: CookieConfig {
                secure: env::var("COOKIE_SECURE")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(false),
                same_site: parse_same_site(
                    &env::var("COOKIE_SAME_SITE").unwrap_or_else(|_| "lax".to_string()),
                ),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string())
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
            },
        })
    }
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_same_site() {
        assert_eq!(parse_same_site("strict"), SameSite::Strict);
        assert_eq!(parse_same_site("Strict"), SameSite::Strict);
        assert_eq!(parse_same_site("none"), SameSite::None);
        assert_eq!(parse_same_site("lax"), SameSite::Lax);
        // Unknown values fall back to the relaxed default.
        assert_eq!(parse_same_site("bogus"), SameSite::Lax);
    }
}
