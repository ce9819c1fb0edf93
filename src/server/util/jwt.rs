//! HS256 bearer tokens for the mobile API.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::auth::AuthError,
    model::auth::{Claims, TokenType},
};

/// Access token lifetime in seconds.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// Refresh token lifetime in seconds (30 days).
pub const REFRESH_TOKEN_TTL_SECS: i64 = 60 * 60 * 24 * 30;

pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub expires_at: i64,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token of the given type for `user_id`, returning it with its expiry.
    pub fn issue(
        &self,
        user_id: i32,
        token_type: TokenType,
        now: DateTime<Utc>,
    ) -> Result<(String, i64), jsonwebtoken::errors::Error> {
        let ttl = match token_type {
            TokenType::Access => ACCESS_TOKEN_TTL_SECS,
            TokenType::Refresh => REFRESH_TOKEN_TTL_SECS,
        };
        let iat = now.timestamp();
        let exp = iat + ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp,
            token_type,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        Ok((token, exp))
    }

    pub fn issue_pair(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let (access_token, expires_at) = self.issue(user_id, TokenType::Access, now)?;
        let (refresh_token, _) = self.issue(user_id, TokenType::Refresh, now)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: ACCESS_TOKEN_TTL_SECS,
            expires_at,
        })
    }

    /// Validates signature, expiry, and token type, returning the user ID.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<i32, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AuthError::InvalidToken
        })?;

        if data.claims.token_type != expected {
            return Err(AuthError::InvalidToken);
        }

        data.claims.user_id().ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{JwtKeys, ACCESS_TOKEN_TTL_SECS};
    use crate::server::{error::auth::AuthError, model::auth::TokenType};

    #[test]
    fn access_token_round_trips_user_id() {
        let keys = JwtKeys::new("secret");
        let pair = keys.issue_pair(42, Utc::now()).unwrap();

        assert_eq!(keys.verify(&pair.access_token, TokenType::Access).unwrap(), 42);
        assert_eq!(pair.expires_in, ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let keys = JwtKeys::new("secret");
        let pair = keys.issue_pair(42, Utc::now()).unwrap();

        let result = keys.verify(&pair.refresh_token, TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
        assert!(keys.verify(&pair.refresh_token, TokenType::Refresh).is_ok());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let pair = JwtKeys::new("other").issue_pair(1, Utc::now()).unwrap();

        let result = JwtKeys::new("secret").verify(&pair.access_token, TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::new("secret");
        let issued = Utc::now() - Duration::hours(3);
        let (token, _) = keys.issue(1, TokenType::Access, issued).unwrap();

        let result = keys.verify(&token, TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_garbage() {
        let result = JwtKeys::new("secret").verify("not-a-jwt", TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
