//! Password hashing and verification
//!
//! Argon2id with a random salt per hash. Stored values are PHC strings, so
//! the admin hash in `ADMIN_PASSWORD_HASH` can be produced by any Argon2 tool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

const MIN_PASSWORD_LEN: usize = 8;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// `Ok(false)` on mismatch; `Err` only when `hash` is not a PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("malformed password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// At least 8 characters with an uppercase letter, a lowercase letter and a digit
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let problem = if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters long")
    } else if !password.chars().any(char::is_uppercase) {
        Some("Password must contain at least one uppercase letter")
    } else if !password.chars().any(char::is_lowercase) {
        Some("Password must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one digit")
    } else {
        None
    };

    match problem {
        Some(msg) => Err(AppError::validation(msg)),
        None => Ok(()),
    }
}
