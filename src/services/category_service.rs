//! Category service - Read access to product categories.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MSG_CATEGORY_NOT_FOUND;
use crate::dto::CategoryResponse;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All categories ordered by name
    async fn list_categories(&self) -> AppResult<Vec<CategoryResponse>>;

    async fn get_category(&self, id: Uuid) -> AppResult<CategoryResponse>;
}

pub struct CategoryCatalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryCatalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryCatalog<U> {
    async fn list_categories(&self) -> AppResult<Vec<CategoryResponse>> {
        let categories = self.uow.categories().list().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn get_category(&self, id: Uuid) -> AppResult<CategoryResponse> {
        self.uow
            .categories()
            .get_by_id(id)
            .await?
            .ok_or_not_found(MSG_CATEGORY_NOT_FOUND)
            .map(CategoryResponse::from)
    }
}
