//! Category repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
use crate::domain::Category;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> AppResult<Category>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Fetch every category whose id is in `ids` with a single query.
    /// Unknown ids are skipped; order is unspecified.
    async fn get_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Category>>;

    /// All categories ordered by name
    async fn list(&self) -> AppResult<Vec<Category>>;
}

pub struct CategoryStore<C> {
    db: Arc<C>,
}

impl<C> CategoryStore<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> CategoryRepository for CategoryStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn create(&self, category: &Category) -> AppResult<Category> {
        let active_model = ActiveModel {
            category_id: Set(category.id),
            name: Set(category.name.clone()),
            description: Set(category.description.clone()),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Category::from(model))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = CategoryEntity::find()
            .filter(category::Column::CategoryId.is_in(ids.iter().copied()))
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }
}
