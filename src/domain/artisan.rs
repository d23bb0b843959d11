//! Artisan (seller) role entity.

use uuid::Uuid;

use super::AccountStatus;

/// Seller profile. Shares its primary key with the owning [`super::User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artisan {
    pub artisan_id: Uuid,
    pub store_name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub status: AccountStatus,
}

impl Artisan {
    pub fn new(
        user_id: Uuid,
        store_name: String,
        phone: Option<String>,
        bio: Option<String>,
    ) -> Self {
        Self {
            artisan_id: user_id,
            store_name: store_name.trim().to_string(),
            phone,
            bio,
            status: AccountStatus::Active,
        }
    }
}
