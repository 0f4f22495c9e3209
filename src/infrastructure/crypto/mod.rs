//! Cryptographic primitives: bcrypt password hashing and HMAC-signed JWTs

pub mod jwt;
pub mod password;

pub use jwt::{create_token, verify_token, JwtConfig, TokenClaims};
pub use password::{check_password_policy, hash_password, verify_password};
