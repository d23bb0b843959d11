//! Password value object - strength policy and hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Password value object that handles validation and hashing.
///
/// Only ever holds the argon2 PHC string, never the plain text.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Validate the plain text against the strength policy, then hash it.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidPassword`] naming the first rule that fails.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        Self::check_strength(plain_text)?;
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Check the strength policy without hashing.
    ///
    /// Rules are checked in order: length, uppercase, lowercase, digit,
    /// special character.
    pub fn check_strength(plain_text: &str) -> AppResult<()> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::InvalidPassword(format!(
                "Password must be at least {} characters long.",
                MIN_PASSWORD_LENGTH
            )));
        }
        if !plain_text.chars().any(char::is_uppercase) {
            return Err(AppError::InvalidPassword(
                "Password must contain at least one uppercase letter.".to_string(),
            ));
        }
        if !plain_text.chars().any(char::is_lowercase) {
            return Err(AppError::InvalidPassword(
                "Password must contain at least one lowercase letter.".to_string(),
            ));
        }
        if !plain_text.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidPassword(
                "Password must contain at least one number.".to_string(),
            ));
        }
        if !plain_text
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            return Err(AppError::InvalidPassword(
                "Password must contain at least one special character.".to_string(),
            ));
        }
        Ok(())
    }

    /// Wrap an already hashed value.
    #[cfg(test)]
    pub(crate) fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Consume and return the hash string for storage.
    pub fn into_string(self) -> String {
        self.hash
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}
