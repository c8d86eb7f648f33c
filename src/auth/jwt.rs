use crate::types::{AppError, Claims};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Why a session token failed verification.
///
/// Handlers collapse every kind into a uniform 401; the kind is only logged.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
}

/// Session token codec.
///
/// Signs an identity claim into an HS256 token with an absolute expiry and
/// verifies inbound tokens against the same server-held secret. Stateless:
/// nothing is persisted, so there is no revocation.
pub struct AuthService {
    jwt_secret: String,
    validity: Duration,
}

impl AuthService {
    /// Creates a codec over the given secret with a validity window in hours.
    pub fn new(jwt_secret: String, validity_hours: i64) -> Self {
        Self {
            jwt_secret,
            validity: Duration::hours(validity_hours),
        }
    }

    /// Signs the identity claim into a session token expiring at issuance
    /// time plus the configured validity window.
    pub fn issue(&self, email: &str) -> crate::types::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.validity).timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// Checks signature integrity and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => VerifyError::InvalidSignature,
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            _ => VerifyError::Malformed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> AuthService {
        AuthService::new(
            "test-secret-key-that-is-at-least-32-chars".to_string(),
            6,
        )
    }

    #[test]
    fn test_token_round_trip() {
        let service = create_test_service();
        let email = "donor@example.com";

        let token = service.issue(email).expect("should issue token");
        let claims = service.verify(&token).expect("should verify token");

        assert_eq!(claims.email, email, "identity claim should round-trip");
    }

    #[test]
    fn test_claims_expiration_window() {
        let service = create_test_service();
        let token = service.issue("user@example.com").expect("should issue");
        let claims = service.verify(&token).expect("should verify");

        let now = Utc::now().timestamp() as usize;

        // iat should be around now
        assert!(
            claims.iat <= now && claims.iat >= now - 5,
            "iat should be current timestamp"
        );

        // exp should be iat + 6 hours
        let expected_exp = claims.iat + 6 * 3600;
        assert!(
            claims.exp >= expected_exp - 5 && claims.exp <= expected_exp + 5,
            "exp should be iat + 6 hours"
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();

        // Craft a token whose expiry passed two hours ago.
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            email: "late@example.com".to_string(),
            iat: now - 8 * 3600,
            exp: now - 2 * 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test-secret-key-that-is-at-least-32-chars".as_bytes()),
        )
        .expect("should encode");

        assert_eq!(service.verify(&token), Err(VerifyError::Expired));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = create_test_service();
        let token = service.issue("user@example.com").expect("should issue");

        // Flip the last character of the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().expect("token should not be empty");
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let result = service.verify(&tampered);
        assert!(result.is_err(), "tampered token should fail verification");
        assert_ne!(
            result,
            Err(VerifyError::Expired),
            "tampering should not read as expiry"
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service1 = AuthService::new("secret-one-that-is-32-chars-long".to_string(), 6);
        let service2 = AuthService::new("secret-two-that-is-32-chars-long".to_string(), 6);

        let token = service1.issue("user@example.com").expect("should issue");
        assert_eq!(
            service2.verify(&token),
            Err(VerifyError::InvalidSignature),
            "token from different secret should fail"
        );
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = create_test_service();
        assert_eq!(
            service.verify("not-even-a-token"),
            Err(VerifyError::Malformed)
        );
        assert_eq!(
            service.verify("invalid.token.here"),
            Err(VerifyError::Malformed)
        );
        assert_eq!(service.verify(""), Err(VerifyError::Malformed));
    }
}
