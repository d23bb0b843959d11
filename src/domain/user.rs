//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Email, Password};
use crate::config::{
    ROLE_ARTISAN, ROLE_BUYER, STATUS_ACTIVE, STATUS_INACTIVE, STATUS_PENDING, STATUS_SUSPENDED,
};

/// Account lifecycle status shared by users and artisans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => STATUS_ACTIVE,
            AccountStatus::Inactive => STATUS_INACTIVE,
            AccountStatus::Pending => STATUS_PENDING,
            AccountStatus::Suspended => STATUS_SUSPENDED,
        }
    }
}

/// Unknown values read back from the database are treated as inactive.
impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ACTIVE => AccountStatus::Active,
            STATUS_PENDING => AccountStatus::Pending,
            STATUS_SUSPENDED => AccountStatus::Suspended,
            _ => AccountStatus::Inactive,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marketplace role a user registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Artisan,
    Buyer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Artisan => write!(f, "{}", ROLE_ARTISAN),
            UserRole::Buyer => write!(f, "{}", ROLE_BUYER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub status: AccountStatus,
    pub address_id: Option<Uuid>,
    pub registration_date: DateTime<Utc>,
}

impl User {
    /// Create a new active user registered now
    pub fn new(email: Email, password: Password, address_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into_string(),
            password_hash: password.into_string(),
            status: AccountStatus::Active,
            address_id,
            registration_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            AccountStatus::Active,
            AccountStatus::Inactive,
            AccountStatus::Pending,
            AccountStatus::Suspended,
        ] {
            assert_eq!(AccountStatus::from(status.as_str()), status);
        }
        assert_eq!(AccountStatus::from("archived"), AccountStatus::Inactive);
    }

    #[test]
    fn test_new_user_is_active_and_hashes_password() {
        let email = Email::parse("artisan@example.com").unwrap();
        let password = Password::new("ValidPassword123!").unwrap();
        let user = User::new(email, password, None);

        assert_eq!(user.status, AccountStatus::Active);
        assert!(user.password_hash.starts_with("$argon2id$"));
        assert_ne!(user.password_hash, "ValidPassword123!");
        assert_eq!(UserRole::Artisan.to_string(), "artisan");
    }
}
