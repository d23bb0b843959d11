//! Product repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::Product;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product.
    ///
    /// Fails with [`AppError::DuplicateProductName`] when the artisan already
    /// has a product with the same name.
    async fn create(&self, product: &Product) -> AppResult<Product>;

    async fn get_product_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find the artisan's product with exactly this name
    async fn get_artisan_product_by_name(
        &self,
        artisan_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Product>>;

    /// All products of an artisan, oldest first
    async fn find_by_artisan_id(&self, artisan_id: Uuid) -> AppResult<Vec<Product>>;
}

pub struct ProductStore<C> {
    db: Arc<C>,
}

impl<C> ProductStore<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> ProductRepository for ProductStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn create(&self, product: &Product) -> AppResult<Product> {
        let active_model = ActiveModel {
            product_id: Set(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            stock: Set(product.stock),
            image_url: Set(product.image_url.clone()),
            status: Set(product.status.as_str().to_string()),
            artisan_id: Set(product.artisan_id),
            category_id: Set(product.category_id),
            registration_date: Set(product.registration_date),
        };

        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| {
                if AppError::is_unique_violation(&e) {
                    AppError::DuplicateProductName
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(Product::from(model))
    }

    async fn get_product_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn get_artisan_product_by_name(
        &self,
        artisan_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Product>> {
        let result = ProductEntity::find()
            .filter(product::Column::ArtisanId.eq(artisan_id))
            .filter(product::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn find_by_artisan_id(&self, artisan_id: Uuid) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::ArtisanId.eq(artisan_id))
            .order_by_asc(product::Column::RegistrationDate)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}
