//! Product DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::CategoryResponse;
use crate::domain::{Category, Product};

/// New product for an artisan's catalog.
///
/// Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterProductRequest {
    #[validate(length(max = 255, message = "Product name must be at most 255 characters"))]
    #[schema(example = "Vaso de barro")]
    pub name: String,
    #[schema(example = "Vaso modelado à mão e queimado em forno a lenha.")]
    pub description: Option<String>,
    /// Accepts a JSON number or a numeric string
    #[schema(value_type = f64, example = 89.9)]
    pub price: Decimal,
    /// Defaults to 0
    #[schema(example = 10)]
    pub stock: Option<i32>,
    pub category_id: Uuid,
    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    #[schema(example = "https://cdn.example.com/vaso.jpg")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 89.9)]
    pub price: Decimal,
    pub stock: i32,
    pub image_url: Option<String>,
    #[schema(example = "active")]
    pub status: String,
    pub artisan_id: Uuid,
    pub registration_date: DateTime<Utc>,
    pub category: CategoryResponse,
}

impl ProductResponse {
    pub fn new(product: Product, category: Category) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            image_url: product.image_url,
            status: product.status.to_string(),
            artisan_id: product.artisan_id,
            registration_date: product.registration_date,
            category: CategoryResponse::from(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewProduct;

    #[test]
    fn test_request_rejects_unknown_fields() {
        let body = serde_json::json!({
            "name": "Vaso",
            "price": 10.5,
            "category_id": Uuid::new_v4(),
            "discount": 5
        });

        assert!(serde_json::from_value::<RegisterProductRequest>(body).is_err());
    }

    #[test]
    fn test_request_accepts_numeric_string_price() {
        let body = serde_json::json!({
            "name": "Vaso",
            "price": "10.50",
            "category_id": Uuid::new_v4()
        });

        let req: RegisterProductRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.price, Decimal::new(1050, 2));
        assert_eq!(req.stock, None);
    }

    #[test]
    fn test_response_serializes_price_as_number() {
        let category = Category::new("Cerâmica", None);
        let product = Product::new(NewProduct {
            name: "Vaso".into(),
            description: None,
            price: Decimal::new(8990, 2),
            stock: 3,
            image_url: None,
            artisan_id: Uuid::new_v4(),
            category_id: category.id,
        });

        let json = serde_json::to_value(ProductResponse::new(product, category)).unwrap();
        assert_eq!(json["price"], serde_json::json!(89.9));
        assert_eq!(json["status"], "active");
        assert_eq!(json["category"]["name"], "Cerâmica");
    }
}
