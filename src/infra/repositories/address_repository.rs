//! Address repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::address::{self, ActiveModel, Entity as AddressEntity};
use crate::domain::Address;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Insert a new address row
    async fn save(&self, address: &Address) -> AppResult<Address>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Address>>;

    /// Find an address sharing the dedup key of `address`.
    ///
    /// A missing `number` only matches rows whose number is also NULL.
    async fn get_by_attributes(&self, address: &Address) -> AppResult<Option<Address>>;
}

/// SeaORM implementation of AddressRepository
pub struct AddressStore<C> {
    db: Arc<C>,
}

impl<C> AddressStore<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> AddressRepository for AddressStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn save(&self, address: &Address) -> AppResult<Address> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            address_id: Set(address.id),
            street: Set(address.street.clone()),
            number: Set(address.number.clone()),
            complement: Set(address.complement.clone()),
            neighborhood: Set(address.neighborhood.clone()),
            city: Set(address.city.clone()),
            state: Set(address.state.clone()),
            zip_code: Set(address.zip_code.clone()),
            country: Set(address.country.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Address::from(model))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Address>> {
        let result = AddressEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Address::from))
    }

    async fn get_by_attributes(&self, address: &Address) -> AppResult<Option<Address>> {
        let number = match &address.number {
            Some(number) => address::Column::Number.eq(number.as_str()),
            None => address::Column::Number.is_null(),
        };

        let result = AddressEntity::find()
            .filter(
                Condition::all()
                    .add(address::Column::Street.eq(address.street.as_str()))
                    .add(number)
                    .add(address::Column::Neighborhood.eq(address.neighborhood.as_str()))
                    .add(address::Column::City.eq(address.city.as_str()))
                    .add(address::Column::State.eq(address.state.as_str()))
                    .add(address::Column::ZipCode.eq(address.zip_code.as_str())),
            )
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Address::from))
    }
}
