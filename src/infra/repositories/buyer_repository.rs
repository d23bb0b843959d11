//! Buyer repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use uuid::Uuid;

use super::entities::buyer::{ActiveModel, Entity as BuyerEntity};
use crate::domain::Buyer;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BuyerRepository: Send + Sync {
    /// Insert the buyer profile of an already saved user
    async fn save(&self, buyer: &Buyer) -> AppResult<Buyer>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Buyer>>;
}

pub struct BuyerStore<C> {
    db: Arc<C>,
}

impl<C> BuyerStore<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> BuyerRepository for BuyerStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn save(&self, buyer: &Buyer) -> AppResult<Buyer> {
        let active_model = ActiveModel {
            buyer_id: Set(buyer.buyer_id),
            full_name: Set(buyer.full_name.clone()),
            phone: Set(buyer.phone.clone()),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Buyer::from(model))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Buyer>> {
        let result = BuyerEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Buyer::from))
    }
}
