//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracker_core::Role;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (customer id)
    pub sub: String,
    /// Role claim checked by the boundary layer
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the customer id from the subject
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as an id
    pub fn customer_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Issued access token with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for issuing and verifying tokens.
///
/// The signing key is fixed at construction and shared read-only; issuance
/// and verification are pure, synchronous operations.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, token_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl,
        }
    }

    /// Issue a signed access token for a customer and role
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, customer_id: i64, role: Role) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: customer_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_ttl)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(AccessToken {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_ttl,
        })
    }

    /// Decode and validate a presented token.
    ///
    /// Expiry is reported distinctly from every other failure so the boundary
    /// can keep the `TokenExpired` taxonomy row separate from a generic 401.
    ///
    /// # Errors
    /// Returns `TokenExpired` for an outdated token, `InvalidToken` otherwise
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::ErrorKind;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_token() {
        let service = create_test_service();

        let issued = service.issue(12345, Role::Member).unwrap();

        assert!(!issued.access_token.is_empty());
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 3600);
    }

    #[test]
    fn test_round_trip_preserves_subject_and_role() {
        let service = create_test_service();

        let issued = service.issue(12345, Role::Admin).unwrap();
        let claims = service.verify(&issued.access_token).unwrap();

        assert_eq!(claims.customer_id().unwrap(), 12345);
        assert_eq!(claims.role, Role::Admin);
        assert!(!claims.is_expired());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_token_expired_not_unauthorized() {
        // TTL far enough in the past to clear the default 60s leeway
        let service = JwtService::new("test-secret-key-that-is-long-enough", -7200);

        let issued = service.issue(12345, Role::Member).unwrap();
        let result = service.verify(&issued.access_token);

        assert!(matches!(result, Err(AppError::TokenExpired)));
        assert_eq!(AppError::TokenExpired.kind(), ErrorKind::TokenExpired);
    }

    #[test]
    fn test_malformed_token() {
        let service = create_test_service();

        let result = service.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = create_test_service();
        let other = JwtService::new("a-completely-different-signing-key", 3600);

        // Token signed with a different key: same shape, wrong signature
        let forged = other.issue(12345, Role::Admin).unwrap();
        let result = service.verify(&forged.access_token);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_claims_customer_id() {
        let claims = Claims {
            sub: "12345".to_string(),
            role: Role::Member,
            iat: 0,
            exp: i64::MAX,
        };

        assert_eq!(claims.customer_id().unwrap(), 12345);

        let bad = Claims {
            sub: "not-a-number".to_string(),
            ..claims
        };
        assert!(bad.customer_id().is_err());
    }
}
