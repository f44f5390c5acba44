//! Session token management
//!
//! The server-side analogue of the old client-local session marker: a signed
//! HS256 token carrying the admin username, issued on successful login and
//! required by the admin routes. Logout is client-side token disposal.

use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session lifetime in hours
pub const SESSION_TTL_HOURS: i64 = 12;

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (admin username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token id
    pub jti: Uuid,
}

/// Create a session token for the admin user
pub fn create_session_token(username: &str, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: username.to_string(),
        exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create session token: {}", e)))
}

/// Decode and validate a session token
pub fn decode_session_token(token: &str, secret: &str) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_round_trip() {
        let token = create_session_token("admin", "test-secret").unwrap();
        let claims = decode_session_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_session_token("admin", "test-secret").unwrap();
        assert!(decode_session_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(decode_session_token("not-a-token", "test-secret").is_err());
    }
}
