//! Artisan product service - Product catalog of each artisan.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{
    MAX_PRODUCT_PRICE, MSG_ARTISAN_NOT_FOUND, MSG_CATEGORY_NOT_FOUND, MSG_INVALID_PRODUCT,
};
use crate::domain::{Category, NewProduct, Product};
use crate::dto::{ProductResponse, RegisterProductRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ArtisanProductService: Send + Sync {
    /// Add a product to an artisan's catalog.
    ///
    /// Checks, in order: the artisan exists, the category exists, the name is
    /// not blank, the price rounded to cents is within `0..=MAX_PRODUCT_PRICE`,
    /// stock is not negative, the artisan has no product with the same name.
    async fn create_artisan_product(
        &self,
        artisan_id: Uuid,
        request: RegisterProductRequest,
    ) -> AppResult<ProductResponse>;

    /// Every product of an artisan with its category, oldest first.
    async fn get_all_products_by_artisan(&self, artisan_id: Uuid)
        -> AppResult<Vec<ProductResponse>>;
}

/// Concrete implementation of ArtisanProductService using Unit of Work.
pub struct ArtisanProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ArtisanProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_artisan(&self, artisan_id: Uuid) -> AppResult<()> {
        self.uow
            .artisans()
            .get_artisan_by_id(artisan_id)
            .await?
            .ok_or_unknown(MSG_ARTISAN_NOT_FOUND)
            .map(|_| ())
    }
}

#[async_trait]
impl<U: UnitOfWork> ArtisanProductService for ArtisanProductManager<U> {
    async fn create_artisan_product(
        &self,
        artisan_id: Uuid,
        request: RegisterProductRequest,
    ) -> AppResult<ProductResponse> {
        self.ensure_artisan(artisan_id).await?;

        let category = self
            .uow
            .categories()
            .get_by_id(request.category_id)
            .await?
            .ok_or_unknown(MSG_CATEGORY_NOT_FOUND)?;

        let name = request.name.trim().to_string();
        let price = Product::round_price(request.price);
        let stock = request.stock.unwrap_or(0);
        if name.is_empty() || price < Decimal::ZERO || price > MAX_PRODUCT_PRICE || stock < 0 {
            tracing::debug!(%artisan_id, "Product rejected: invalid data");
            return Err(AppError::validation(MSG_INVALID_PRODUCT));
        }

        if self
            .uow
            .products()
            .get_artisan_product_by_name(artisan_id, &name)
            .await?
            .is_some()
        {
            tracing::debug!(%artisan_id, name = %name, "Product rejected: duplicate name");
            return Err(AppError::DuplicateProductName);
        }

        let product = self
            .uow
            .products()
            .create(&Product::new(NewProduct {
                name,
                description: request.description,
                price,
                stock,
                image_url: request.image_url,
                artisan_id,
                category_id: category.id,
            }))
            .await?;

        tracing::info!(product_id = %product.id, %artisan_id, "Product created");
        Ok(ProductResponse::new(product, category))
    }

    async fn get_all_products_by_artisan(
        &self,
        artisan_id: Uuid,
    ) -> AppResult<Vec<ProductResponse>> {
        self.ensure_artisan(artisan_id).await?;

        let products = self.uow.products().find_by_artisan_id(artisan_id).await?;
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let mut category_ids: Vec<Uuid> = products.iter().map(|p| p.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories: HashMap<Uuid, Category> = self
            .uow
            .categories()
            .get_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        products
            .into_iter()
            .map(|product| {
                let category = categories.get(&product.category_id).cloned().ok_or_else(|| {
                    AppError::internal(format!(
                        "Category {} of product {} is missing",
                        product.category_id, product.id
                    ))
                })?;
                Ok(ProductResponse::new(product, category))
            })
            .collect()
    }
}
