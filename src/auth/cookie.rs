use crate::utils::config::CookieConfig;
use axum_extra::extract::cookie::Cookie;

/// Name of the cookie slot carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Builds the session cookie with the configured attribute set.
///
/// Always `HttpOnly`; `Secure` and `SameSite` come from deployment
/// configuration rather than being hardcoded per call site.
pub fn session_cookie(token: String, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(config.same_site)
        .build()
}

/// Builds the cookie handed to the jar's removal path on logout.
///
/// Browsers only drop a cookie when the clearing attributes mirror the set
/// attributes, so this goes through [`session_cookie`] with an empty value.
pub fn clear_session_cookie(config: &CookieConfig) -> Cookie<'static> {
    session_cookie(String::new(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::SameSite;

    #[test]
    fn test_session_cookie_is_http_only() {
        let config = CookieConfig {
            secure: false,
            same_site: SameSite::Lax,
        };
        let cookie = session_cookie("abc.def.ghi".to_string(), &config);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc.def.ghi");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_production_attributes() {
        let config = CookieConfig {
            secure: true,
            same_site: SameSite::None,
        };
        let cookie = session_cookie("t".to_string(), &config);

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_clear_cookie_mirrors_attributes() {
        let config = CookieConfig {
            secure: true,
            same_site: SameSite::Strict,
        };
        let set = session_cookie("t".to_string(), &config);
        let clear = clear_session_cookie(&config);

        assert_eq!(clear.name(), set.name());
        assert_eq!(clear.value(), "");
        assert_eq!(clear.http_only(), set.http_only());
        assert_eq!(clear.secure(), set.secure());
        assert_eq!(clear.same_site(), set.same_site());
        assert_eq!(clear.path(), set.path());
    }
}
