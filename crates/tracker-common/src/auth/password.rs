//! Password policy and hashing utilities
//!
//! The policy check is a pure function returning every violated rule;
//! hashing uses Argon2id (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single password policy rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
}

impl PasswordRule {
    /// Human-readable description of the rule
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::MinLength => "must be at least 8 characters long",
            Self::Uppercase => "must contain at least one uppercase letter",
            Self::Lowercase => "must contain at least one lowercase letter",
            Self::Digit => "must contain at least one digit",
            Self::SpecialChar => "must contain at least one special character",
        }
    }
}

/// Check a candidate password against the policy.
///
/// Returns every violated rule, not just the first, so callers can report
/// per-field detail. Empty input violates all rules by construction.
pub fn validate_password(password: &str) -> Result<(), Vec<PasswordRule>> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push(PasswordRule::MinLength);
    }
    if !password.chars().any(char::is_uppercase) {
        violations.push(PasswordRule::Uppercase);
    }
    if !password.chars().any(char::is_lowercase) {
        violations.push(PasswordRule::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordRule::Digit);
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        violations.push(PasswordRule::SpecialChar);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Check a candidate password, folding violations into a validation error
///
/// # Errors
/// Returns `AppError::Validation` listing every violated rule
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    validate_password(password).map_err(|violations| {
        let detail = violations
            .iter()
            .map(|rule| rule.describe())
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Validation(format!("Password {detail}"))
    })
}

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is in an invalid format
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
