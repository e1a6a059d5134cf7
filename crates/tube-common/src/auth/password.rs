//! Password hashing and strength rules
//!
//! Hashes are Argon2id PHC strings with a random salt per password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tube_core::DomainError;

use crate::error::AppError;

/// Minimum accepted password length (characters)
pub const MIN_PASSWORD_LEN: usize = 8;
/// Maximum accepted password length (characters)
pub const MAX_PASSWORD_LEN: usize = 72;

/// Argon2id hashing service
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password into a PHC string
    ///
    /// # Errors
    /// Returns an internal error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(anyhow::anyhow!("password hashing failed: {e}")))
    }

    /// Check a password against a stored hash
    ///
    /// # Errors
    /// Returns `InvalidCredentials` on mismatch and an internal error for a corrupt hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(anyhow::anyhow!("invalid password hash: {e}")))?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AppError::InvalidCredentials)
    }
}

/// Enforce the account password policy
///
/// Length must be within [`MIN_PASSWORD_LEN`]..=[`MAX_PASSWORD_LEN`] and the
/// password needs an uppercase letter, a lowercase letter, and a digit. All
/// violations are reported together.
///
/// # Errors
/// Returns `WeakPassword` listing the unmet rules
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    let mut problems = Vec::new();

    if len < MIN_PASSWORD_LEN {
        problems.push(format!("at least {MIN_PASSWORD_LEN} characters"));
    }
    if len > MAX_PASSWORD_LEN {
        problems.push(format!("at most {MAX_PASSWORD_LEN} characters"));
    }
    if !password.chars().any(char::is_uppercase) {
        problems.push("an uppercase letter".to_string());
    }
    if !password.chars().any(char::is_lowercase) {
        problems.push("a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("a digit".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(DomainError::WeakPassword(format!("password needs {}", problems.join(", "))).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_argon2id() {
        let service = PasswordService::new();
        let a = service.hash("SecurePassword123").unwrap();
        let b = service.hash("SecurePassword123").unwrap();

        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify() {
        let service = PasswordService::new();
        let hash = service.hash("SecurePassword123").unwrap();

        assert!(service.verify("SecurePassword123", &hash).is_ok());
        assert!(matches!(
            service.verify("WrongPassword123", &hash),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_corrupt_hash_is_internal() {
        let err = PasswordService::new().verify("x", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_strength_accepts_policy_compliant_passwords() {
        assert!(validate_password_strength("Abcdefg1").is_ok());
        assert!(validate_password_strength("MyP@ssw0rd!").is_ok());
    }

    #[test]
    fn test_strength_reports_every_problem() {
        let err = validate_password_strength("short").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("at least 8 characters"));
        assert!(message.contains("uppercase"));
        assert!(message.contains("digit"));
        assert!(!message.contains("lowercase"));
        assert_eq!(err.error_code(), "WEAK_PASSWORD");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_strength_rejects_overlong() {
        let long = format!("Aa1{}", "x".repeat(MAX_PASSWORD_LEN));
        let err = validate_password_strength(&long).unwrap_err();
        assert!(err.to_string().contains("at most 72"));
    }
}
