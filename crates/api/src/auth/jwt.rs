//! JWT token service.
//!
//! Tokens are HS256-signed and carry only the subject user id plus the
//! issue/expiry timestamps. They are stateless: nothing is persisted
//! server-side, and logout clears the client-held copy without revoking the
//! token itself.

use inkstream_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for token generation and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub token_expiry_hours: i64,
}

/// Default token expiry in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `JWT_SECRET`           | **yes**  | --      |
    /// | `JWT_EXPIRES_IN_HOURS` | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let token_expiry_hours: i64 = std::env::var("JWT_EXPIRES_IN_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRES_IN_HOURS must be a valid i64");

        Self {
            secret,
            token_expiry_hours,
        }
    }
}

/// Mint a signed token for the given user.
pub fn generate_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now + config.token_expiry_hours * 3600,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token and return the embedded user id.
///
/// `None` covers every expected failure: malformed input, a bad signature,
/// an expired token. Verification failure is a common condition on this path
/// and is never surfaced as an error.
pub fn verify_token(token: &str, config: &JwtConfig) -> Option<DbId> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .ok()
    .map(|data| data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_hours: 24,
        }
    }

    #[test]
    fn test_generate_and_verify_token() {
        let config = test_config();
        let token = generate_token(42, &config).expect("token generation should succeed");

        assert_eq!(verify_token(&token, &config), Some(42));
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            iat: now - 600,
            exp: now - 300, // expired 5 minutes ago (well past leeway)
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert_eq!(
            verify_token(&token, &config),
            None,
            "expired token must fail verification"
        );
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            token_expiry_hours: 24,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            token_expiry_hours: 24,
        };

        let token = generate_token(1, &config_a).expect("token generation should succeed");

        assert_eq!(
            verify_token(&token, &config_b),
            None,
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_garbage_token_fails() {
        let config = test_config();
        assert_eq!(verify_token("not-a-jwt", &config), None);
        assert_eq!(verify_token("", &config), None);
    }
}
