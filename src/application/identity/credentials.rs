//! Credential & token service
//!
//! Owns the signing configuration and bcrypt cost for the whole process.
//! Both are fixed at construction.

use jsonwebtoken::errors::ErrorKind;

use crate::domain::{DomainError, DomainResult, User};
use crate::infrastructure::crypto::jwt::{create_token, verify_token, JwtConfig, TokenClaims};
use crate::infrastructure::crypto::password::{
    check_password_policy, check_password_size, hash_password, verify_password,
};

/// A freshly signed session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

pub struct CredentialService {
    jwt: JwtConfig,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(jwt: JwtConfig, bcrypt_cost: u32) -> Self {
        Self { jwt, bcrypt_cost }
    }

    /// Fails with `Validation` for input longer than bcrypt can take.
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        check_password_size(password).map_err(DomainError::Validation)?;
        hash_password(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("failed to hash password: {}", e)))
    }

    /// `false` for any mismatch, including a malformed digest.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        verify_password(password, digest)
    }

    /// Rejects with the human-readable policy message.
    pub fn check_policy(&self, password: &str) -> DomainResult<()> {
        check_password_policy(password).map_err(DomainError::Validation)
    }

    pub fn issue(&self, user: &User) -> DomainResult<IssuedToken> {
        let token = create_token(&user.id, &user.email, user.role, &self.jwt)
            .map_err(|e| DomainError::Internal(format!("failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt.ttl().num_seconds(),
        })
    }

    pub fn validate(&self, token: &str) -> DomainResult<TokenClaims> {
        verify_token(token, &self.jwt).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "token expired",
                ErrorKind::InvalidSignature => "signature mismatch",
                ErrorKind::InvalidAlgorithm => "unexpected signing algorithm",
                ErrorKind::InvalidIssuer => "unexpected issuer",
                _ => "malformed token",
            };
            DomainError::InvalidToken(reason.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use chrono::Utc;

    fn service(secret: &str) -> CredentialService {
        CredentialService::new(
            JwtConfig {
                secret: secret.into(),
                expiration_hours: 1,
                issuer: "switchgear-test".into(),
            },
            4,
        )
    }

    fn alice() -> User {
        User {
            id: "u-1".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            password_hash: String::new(),
            role: UserRole::Dispatcher,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_validates_to_the_same_identity() {
        let svc = service("s3cret");
        let issued = svc.issue(&alice()).unwrap();
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 3600);

        let claims = svc.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, UserRole::Dispatcher);
    }

    #[test]
    fn other_secret_is_an_invalid_token() {
        let issued = service("one").issue(&alice()).unwrap();
        let err = service("two").validate(&issued.token).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken(ref r) if r == "signature mismatch"));
    }

    #[test]
    fn garbage_is_an_invalid_token() {
        let err = service("one").validate("a.b.c").unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken(_)));
    }

    #[test]
    fn hash_then_verify() {
        let svc = service("one");
        let digest = svc.hash("Secret!1").unwrap();
        assert!(svc.verify("Secret!1", &digest));
        assert!(!svc.verify("Secret!2", &digest));
        assert!(!svc.verify("Secret!1", "garbage"));
    }

    #[test]
    fn overlong_password_is_not_hashed() {
        let err = service("one").hash(&"x".repeat(73)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)), "{err:?}");
    }

    #[test]
    fn policy_message_is_passed_through() {
        let err = service("one").check_policy("abc123").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("special character")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(service("one").check_policy("abc123!").is_ok());
    }
}
