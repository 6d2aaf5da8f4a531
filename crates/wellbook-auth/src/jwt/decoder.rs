//! Stateless access token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use wellbook_core::config::auth::AuthConfig;
use wellbook_core::error::AppError;

use super::claims::Claims;

/// Validates JWT access tokens.
///
/// Validation is pure: signature and expiry are checked from the token
/// alone, with no store access. A caller holding a valid token is
/// authenticated for the token's lifetime.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    ///
    /// Applies the same secret-length contract as the encoder.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        config.validate_secret()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates an access token string.
    ///
    /// A token past its expiry fails with `TokenExpired`; any signature
    /// mismatch, malformed structure, or missing claim fails with
    /// `TokenInvalid`.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Access token has expired")
                    }
                    _ => AppError::token_invalid("Access token is invalid"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;
    use wellbook_core::error::ErrorKind;
    use wellbook_entity::user::{User, UserRole};

    const SECRET: &str = "an-integration-test-secret-of-sufficient-length";

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            access_token_ttl_minutes: 60,
            refresh_token_ttl_days: 7,
            password_min_length: 8,
        }
    }

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "booker@example.com".to_string(),
            name: "Booker".to_string(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_round_trip_preserves_identity_and_role() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let decoder = JwtDecoder::new(&config()).unwrap();

        for role in [UserRole::User, UserRole::Practitioner, UserRole::Admin] {
            let u = user(role);
            let (token, _) = encoder.issue(&u).unwrap();
            let claims = decoder.decode(&token).unwrap();

            assert_eq!(claims.user_id(), u.id);
            assert_eq!(claims.email, u.email);
            assert_eq!(claims.role, role);
        }
    }

    #[test]
    fn test_expired_token_fails_with_token_expired() {
        let decoder = JwtDecoder::new(&config()).unwrap();

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "late@example.com".to_string(),
            role: UserRole::User,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }

    #[test]
    fn test_tampered_token_fails_with_token_invalid() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let decoder = JwtDecoder::new(&config()).unwrap();

        let (token, _) = encoder.issue(&user(UserRole::User)).unwrap();
        let mut tampered = token.clone();
        tampered.pop();

        assert_eq!(
            decoder.decode(&tampered).unwrap_err().kind,
            ErrorKind::TokenInvalid
        );
        assert_eq!(
            decoder.decode("not-a-jwt").unwrap_err().kind,
            ErrorKind::TokenInvalid
        );
    }

    #[test]
    fn test_token_signed_with_other_secret_fails() {
        let decoder = JwtDecoder::new(&config()).unwrap();

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret-of-enough-length".to_string(),
            ..config()
        };
        let (token, _) = JwtEncoder::new(&other).unwrap().issue(&user(UserRole::Admin)).unwrap();

        assert_eq!(
            decoder.decode(&token).unwrap_err().kind,
            ErrorKind::TokenInvalid
        );
    }
}
