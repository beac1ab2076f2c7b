//! Bearer token issuance and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued for.
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies HS256 bearer tokens with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    /// Issues a token for a user.
    ///
    /// # Returns
    /// - `Ok((token, expires_at))` - Signed token and its expiry
    /// - `Err(AppError::InternalErr)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiry_hours);

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key)
            .map_err(|e| InternalError::TokenEncoding(e.to_string()))?;

        Ok((token, expires_at))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AppError::AuthErr(InvalidToken))` - Malformed, expired or forged token
    /// - `Err(AppError::InternalErr)` - Key or crypto failure on the server side
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());

        let data = decode::<Claims>(token, &key, &Validation::default()).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::ExpiredSignature
                | ErrorKind::ImmatureSignature
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => AppError::from(AuthError::InvalidToken(e.to_string())),
                _ => AppError::from(InternalError::TokenEncoding(e.to_string())),
            }
        })?;

        Ok(data.claims)
    }
}
