//! Artisan repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use uuid::Uuid;

use super::entities::artisan::{ActiveModel, Entity as ArtisanEntity};
use crate::domain::Artisan;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ArtisanRepository: Send + Sync {
    /// Insert the artisan profile of an already saved user
    async fn save(&self, artisan: &Artisan) -> AppResult<Artisan>;

    async fn get_artisan_by_id(&self, id: Uuid) -> AppResult<Option<Artisan>>;
}

pub struct ArtisanStore<C> {
    db: Arc<C>,
}

impl<C> ArtisanStore<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> ArtisanRepository for ArtisanStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn save(&self, artisan: &Artisan) -> AppResult<Artisan> {
        let active_model = ActiveModel {
            artisan_id: Set(artisan.artisan_id),
            store_name: Set(artisan.store_name.clone()),
            phone: Set(artisan.phone.clone()),
            bio: Set(artisan.bio.clone()),
            status: Set(artisan.status.as_str().to_string()),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Artisan::from(model))
    }

    async fn get_artisan_by_id(&self, id: Uuid) -> AppResult<Option<Artisan>> {
        let result = ArtisanEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Artisan::from))
    }
}
