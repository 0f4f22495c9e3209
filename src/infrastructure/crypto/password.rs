//! Password hashing utilities and password policy

use bcrypt::{hash, verify};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// bcrypt ignores everything past this many bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// At least one of these must appear in a password.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Hash a password using bcrypt with a random salt
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash. A malformed hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

/// Rejects input bcrypt would silently truncate.
pub fn check_password_size(password: &str) -> Result<(), String> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(format!(
            "Password must be at most {} bytes long",
            MAX_PASSWORD_BYTES
        ));
    }
    Ok(())
}

/// Returns the human-readable reason when `password` is not acceptable.
pub fn check_password_policy(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }

    check_password_size(password)?;

    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(
            "Password must contain at least one special character (!@#$%^&* etc.)".to_string(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123!";
        let hashed = hash_password(password, TEST_COST).unwrap();

        assert_ne!(hashed, password);
        assert!(verify_password(password, &hashed));
        assert!(!verify_password("secure_password_124!", &hashed));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("Secret!1", TEST_COST).unwrap();
        let b = hash_password("Secret!1", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("Secret!1", &a));
        assert!(verify_password("Secret!1", &b));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert!(!verify_password("Secret!1", "not-a-bcrypt-hash"));
        assert!(!verify_password("Secret!1", ""));
    }

    #[test]
    fn policy_requires_special_character() {
        let reason = check_password_policy("abc123").unwrap_err();
        assert!(reason.contains("special character"));
        assert!(check_password_policy("abc123!").is_ok());
    }

    #[test]
    fn policy_requires_minimum_length() {
        let reason = check_password_policy("a!1").unwrap_err();
        assert!(reason.contains("at least 6"));
        assert!(check_password_policy("a!1234").is_ok());
    }

    #[test]
    fn policy_rejects_what_bcrypt_would_truncate() {
        let at_limit = format!("!{}", "a".repeat(MAX_PASSWORD_BYTES - 1));
        assert!(check_password_policy(&at_limit).is_ok());

        let over = format!("{}!", "a".repeat(MAX_PASSWORD_BYTES));
        assert!(check_password_policy(&over).unwrap_err().contains("at most 72 bytes"));

        // 25 chars, 73 bytes
        let wide = format!("!{}", "€".repeat(24));
        assert!(wide.len() > MAX_PASSWORD_BYTES);
        assert!(check_password_size(&wide).is_err());
    }

    #[test]
    fn every_listed_special_character_counts() {
        for c in SPECIAL_CHARACTERS.chars() {
            let candidate = format!("abcde{}", c);
            assert!(check_password_policy(&candidate).is_ok(), "{candidate}");
        }
    }
}
