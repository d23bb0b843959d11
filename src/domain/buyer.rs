//! Buyer (purchaser) role entity.

use uuid::Uuid;

/// Purchaser profile. Shares its primary key with the owning [`super::User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buyer {
    pub buyer_id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
}

impl Buyer {
    pub fn new(user_id: Uuid, full_name: String, phone: Option<String>) -> Self {
        Self {
            buyer_id: user_id,
            full_name: full_name.trim().to_string(),
            phone,
        }
    }
}
