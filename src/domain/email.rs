//! Email address value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH};
use crate::errors::{AppError, AppResult};

// Dot-separated labels, at least one dot, alphabetic TLD of two or more letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A syntactically valid email address.
///
/// Surrounding whitespace is trimmed; case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidEmailFormat`] when the input is empty, too
    /// long, has a local part over 64 characters, leading/trailing or
    /// doubled dots in the local part, or a domain without a TLD.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        if value.is_empty() || value.len() > MAX_EMAIL_LENGTH {
            return Err(AppError::InvalidEmailFormat);
        }

        let (local, _domain) = value.split_once('@').ok_or(AppError::InvalidEmailFormat)?;

        if local.len() > MAX_EMAIL_LOCAL_PART_LENGTH
            || local.starts_with('.')
            || local.ends_with('.')
            || local.contains("..")
        {
            return Err(AppError::InvalidEmailFormat);
        }

        if !EMAIL_PATTERN.is_match(value) {
            return Err(AppError::InvalidEmailFormat);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
