//! User repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with [`AppError::DuplicateEmail`] when the email is taken.
    async fn save(&self, user: &User) -> AppResult<User>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore<C> {
    db: Arc<C>,
}

impl<C> UserStore<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> UserRepository for UserStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn save(&self, user: &User) -> AppResult<User> {
        let active_model = ActiveModel {
            user_id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            status: Set(user.status.as_str().to_string()),
            address_id: Set(user.address_id),
            registration_date: Set(user.registration_date),
        };

        // Lost race against a concurrent registration
        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| {
                if AppError::is_unique_violation(&e) {
                    AppError::DuplicateEmail
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(User::from(model))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}
