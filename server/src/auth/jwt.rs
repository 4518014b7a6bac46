//! JWT token service
//!
//! Generation, validation and parsing of access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::types::Role;
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret, at least 32 bytes
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: load_jwt_secret(),
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "latte-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "latte-clients".to_string()),
        }
    }
}

/// Load the signing secret from the environment
///
/// Development builds fall back to a fixed key so the server can boot
/// without configuration. Release builds refuse to start without one.
fn load_jwt_secret() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= 32 => secret,
        Ok(_) => panic!("JWT_SECRET must be at least 32 characters long"),
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set, using development key");
                "latte-development-key-do-not-use-in-production".to_string()
            }
            #[cfg(not(debug_assertions))]
            {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        }
    }
}

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// Username
    pub username: String,
    /// Role name
    pub role: String,
    /// Token type
    pub token_type: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate an access token for a user
    pub fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        role: Role,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.as_str().to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new(JwtConfig::default())
    }
}

/// Current user context parsed from JWT claims
///
/// Created by the auth middleware and injected into request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID, "table:id" form
    pub id: String,
    /// Username
    pub username: String,
    /// Role
    pub role: Role,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            role: claims.role.parse().unwrap_or(Role::Customer),
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-with-enough-length!!".to_string(),
            expiration_minutes: 60,
            issuer: "latte-server".to_string(),
            audience: "latte-clients".to_string(),
        })
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = test_service();

        let token = service
            .generate_token("user:abc", "mika", Role::Customer)
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "user:abc");
        assert_eq!(claims.username, "mika");
        assert_eq!(claims.role, "customer");
    }

    #[test]
    fn test_invalid_signature_rejected() {
        let service = test_service();
        let other = JwtService::new(JwtConfig {
            secret: "another-secret-key-with-enough-length".to_string(),
            ..service.config.clone()
        });

        let token = service
            .generate_token("user:abc", "mika", Role::Customer)
            .expect("Failed to generate test token");

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_current_user_from_claims() {
        let service = test_service();
        let token = service
            .generate_token("user:root", "root", Role::Admin)
            .expect("Failed to generate test token");
        let claims = service.validate_token(&token).expect("validate");
        let user = CurrentUser::from(claims);

        assert!(user.is_admin());
        assert_eq!(user.id, "user:root");
    }
}
