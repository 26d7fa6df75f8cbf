//! Token authentication: argon2 password hashing, HS256 bearer tokens, and
//! the `AuthenticatedUser` extractor handlers use to resolve the acting
//! owner.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::entities::users;
use crate::errors::{ApiError, ServiceError};

/// Claim structure for bearer tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_expiration: Duration,
    pub remember_me_expiration: Duration,
}

impl AuthConfig {
    pub fn from_app_config(cfg: &AppConfig) -> Self {
        Self {
            jwt_secret: cfg.jwt_secret.clone(),
            access_token_expiration: Duration::from_secs(cfg.jwt_expiration_secs),
            remember_me_expiration: Duration::from_secs(cfg.remember_me_expiration_secs),
        }
    }
}

/// The acting owner resolved from a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
}

pub struct AuthService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::InternalError(format!("password hashing failed: {e}")))
    }

    pub fn verify_password(&self, hash: &str, password: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Issue a bearer token for the user. `remember_me` selects the long
    /// lifetime. Returns the token and its lifetime in seconds.
    pub fn issue_token(
        &self,
        user: &users::Model,
        remember_me: bool,
    ) -> Result<(String, u64), ServiceError> {
        let lifetime = if remember_me {
            self.config.remember_me_expiration
        } else {
            self.config.access_token_expiration
        };
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + lifetime.as_secs() as i64,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::InternalError(format!("token encoding failed: {e}")))?;
        Ok((token, lifetime.as_secs()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| ServiceError::AuthError("Invalid or expired token".to_string()))
    }

    pub fn authenticated_user(&self, token: &str) -> Result<AuthenticatedUser, ServiceError> {
        let claims = self.validate_token(token)?;
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ServiceError::AuthError("Invalid token subject".to_string()))?;
        Ok(AuthenticatedUser {
            id,
            username: claims.username,
        })
    }
}

#[async_trait]
impl FromRequestParts<crate::AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        state
            .auth
            .authenticated_user(token)
            .map_err(|_| ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> AuthService {
        AuthService::new(AuthConfig {
            jwt_secret: "a".repeat(64),
            access_token_expiration: Duration::from_secs(3600),
            remember_me_expiration: Duration::from_secs(60 * 60 * 24 * 14),
        })
    }

    fn user() -> users::Model {
        users::Model {
            id: Uuid::new_v4(),
            username: "mira".into(),
            email: "mira@example.com".into(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: None,
            designation: None,
            department: None,
            address: None,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn password_hash_verifies_and_rejects() {
        let auth = service();
        let hash = auth.hash_password("s3cret-pass").unwrap();
        assert!(auth.verify_password(&hash, "s3cret-pass"));
        assert!(!auth.verify_password(&hash, "wrong"));
        assert!(!auth.verify_password("not-a-hash", "s3cret-pass"));
    }

    #[test]
    fn token_round_trip_carries_identity() {
        let auth = service();
        let user = user();
        let (token, _) = auth.issue_token(&user, false).unwrap();
        let resolved = auth.authenticated_user(&token).unwrap();
        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.username, "mira");
    }

    #[test]
    fn remember_me_extends_token_lifetime() {
        let auth = service();
        let user = user();
        let (_, short) = auth.issue_token(&user, false).unwrap();
        let (_, long) = auth.issue_token(&user, true).unwrap();
        assert!(long > short);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let auth = service();
        let (token, _) = auth.issue_token(&user(), false).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(auth.validate_token(&tampered).is_err());
    }
}
