//! Product domain entity.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{STATUS_ACTIVE, STATUS_INACTIVE, STATUS_OUT_OF_STOCK};

/// Product availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    OutOfStock,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => STATUS_ACTIVE,
            ProductStatus::Inactive => STATUS_INACTIVE,
            ProductStatus::OutOfStock => STATUS_OUT_OF_STOCK,
        }
    }
}

impl From<&str> for ProductStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ACTIVE => ProductStatus::Active,
            STATUS_OUT_OF_STOCK => ProductStatus::OutOfStock,
            _ => ProductStatus::Inactive,
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product listed by an artisan.
///
/// `price` and `stock` are never negative; the name is unique per artisan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub image_url: Option<String>,
    pub status: ProductStatus,
    pub artisan_id: Uuid,
    pub category_id: Uuid,
    pub registration_date: DateTime<Utc>,
}

/// Attributes of a product about to be created
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub image_url: Option<String>,
    pub artisan_id: Uuid,
    pub category_id: Uuid,
}

impl Product {
    /// Create an active product registered now.
    ///
    /// The price is rounded with [`Product::round_price`], as a `numeric(10,2)`
    /// column would round it.
    pub fn new(attrs: NewProduct) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: attrs.name,
            description: attrs.description,
            price: Self::round_price(attrs.price),
            stock: attrs.stock,
            image_url: attrs.image_url,
            status: ProductStatus::Active,
            artisan_id: attrs.artisan_id,
            category_id: attrs.category_id,
            registration_date: Utc::now(),
        }
    }

    /// Round to cents, half away from zero.
    pub fn round_price(price: Decimal) -> Decimal {
        price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
