//! Bearer token issuance and verification.
//!
//! Thin wrapper over `jsonwebtoken` (HS256). The REST core only consumes
//! the boolean outcome of [`verify_token`]; claims carry the subject and
//! expiry and nothing else.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// JWT claims carried by issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Token subject (the authenticated user).
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues an HS256 token for the given subject.
pub fn issue_token(secret: &str, subject: &str, ttl_secs: u64) -> ApiResult<String> {
    let exp = (Utc::now() + Duration::seconds(ttl_secs as i64)).timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal {
        message: format!("Token encoding failed: {}", e),
    })
}

/// Verifies a token's signature and expiry, returning its claims.
pub fn verify_token(secret: &str, token: &str) -> ApiResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::unauthorized("Token inválido"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "secreto-de-pruebas";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token = issue_token(SECRET, "admin", 60).unwrap();
        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(SECRET, "admin", 60).unwrap();
        assert!(verify_token("otro-secreto", &token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_token(SECRET, "no.es.un.token").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let exp = (Utc::now() - Duration::hours(1)).timestamp();
        let claims = Claims {
            sub: "admin".to_string(),
            exp,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(verify_token(SECRET, &token).is_err());
    }
}
