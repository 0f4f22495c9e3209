//! JWT Token handling

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::UserRole;

/// Only the symmetric HMAC family is accepted when validating. A token that
/// declares any other algorithm is rejected before its signature is checked.
pub const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "your-super-secret-jwt-key-change-this-in-production".to_string(),
            expiration_hours: 24,
            issuer: "switchgear-service".to_string(),
        }
    }
}

/// Longest accepted token lifetime, one year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

impl JwtConfig {
    /// Hours outside `1..=MAX_TOKEN_TTL_HOURS` are clamped into range.
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.expiration_hours.clamp(1, MAX_TOKEN_TTL_HOURS))
    }
}

/// JWT TokenClaims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    pub iss: String,
}

impl TokenClaims {
    pub fn new(
        user_id: &str,
        email: &str,
        role: UserRole,
        config: &JwtConfig,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let exp = issued_at + config.ttl();

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

/// Create an HS256 token for a user, issued now
pub fn create_token(
    user_id: &str,
    email: &str,
    role: UserRole,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_at(user_id, email, role, config, Utc::now())
}

pub fn create_token_at(
    user_id: &str,
    email: &str,
    role: UserRole,
    config: &JwtConfig,
    issued_at: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims::new(user_id, email, role, config, issued_at);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify signature, algorithm family, issuer and expiry, then decode claims
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.leeway = 0;
    validation.set_issuer(&[&config.issuer]);
    validation.set_required_spec_claims(&["exp", "iat", "sub", "iss"]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
