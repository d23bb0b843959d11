//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Lets a multi-step write (address, user, role profile) land atomically
//!
//! Repositories are handed out as trait objects both outside and inside a
//! transaction, so services can be tested against mocks either way.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    AddressRepository, AddressStore, ArtisanRepository, ArtisanStore, BuyerRepository, BuyerStore,
    CategoryRepository, CategoryStore, ProductRepository, ProductStore, UserRepository, UserStore,
};
use crate::errors::{AppError, AppResult};

/// Access to every repository.
pub trait Repositories: Send + Sync {
    fn addresses(&self) -> Arc<dyn AddressRepository>;

    fn users(&self) -> Arc<dyn UserRepository>;

    fn artisans(&self) -> Arc<dyn ArtisanRepository>;

    fn buyers(&self) -> Arc<dyn BuyerRepository>;

    fn categories(&self) -> Arc<dyn CategoryRepository>;

    fn products(&self) -> Arc<dyn ProductRepository>;
}

/// Unit of Work trait for dependency injection.
///
/// Repositories obtained directly run each statement on its own; repositories
/// obtained from [`UnitOfWork::begin`] share one transaction.
#[async_trait]
pub trait UnitOfWork: Repositories {
    /// Start a ReadCommitted transaction.
    async fn begin(&self) -> AppResult<Box<dyn TransactionScope>>;
}

/// An open transaction.
///
/// Dropping the scope without committing rolls the transaction back.
/// Repository handles taken from the scope must be dropped before
/// [`TransactionScope::commit`].
#[async_trait]
pub trait TransactionScope: Repositories {
    async fn commit(self: Box<Self>) -> AppResult<()>;

    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    address_repo: Arc<AddressStore<DatabaseConnection>>,
    user_repo: Arc<UserStore<DatabaseConnection>>,
    artisan_repo: Arc<ArtisanStore<DatabaseConnection>>,
    buyer_repo: Arc<BuyerStore<DatabaseConnection>>,
    category_repo: Arc<CategoryStore<DatabaseConnection>>,
    product_repo: Arc<ProductStore<DatabaseConnection>>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self {
            address_repo: Arc::new(AddressStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db.clone())),
            artisan_repo: Arc::new(ArtisanStore::new(db.clone())),
            buyer_repo: Arc::new(BuyerStore::new(db.clone())),
            category_repo: Arc::new(CategoryStore::new(db.clone())),
            product_repo: Arc::new(ProductStore::new(db.clone())),
            db,
        }
    }
}

impl Repositories for Persistence {
    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.address_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn artisans(&self) -> Arc<dyn ArtisanRepository> {
        self.artisan_repo.clone()
    }

    fn buyers(&self) -> Arc<dyn BuyerRepository> {
        self.buyer_repo.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn begin(&self) -> AppResult<Box<dyn TransactionScope>> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        Ok(Box::new(PersistenceTransaction {
            txn: Arc::new(txn),
        }))
    }
}

/// Transaction handed out by [`Persistence::begin`].
///
/// Stores are built on demand and borrow the transaction through an `Arc`.
pub struct PersistenceTransaction {
    txn: Arc<DatabaseTransaction>,
}

impl PersistenceTransaction {
    fn into_inner(self) -> AppResult<DatabaseTransaction> {
        Arc::try_unwrap(self.txn)
            .map_err(|_| AppError::internal("Transaction still borrowed by a repository"))
    }
}

impl Repositories for PersistenceTransaction {
    fn addresses(&self) -> Arc<dyn AddressRepository> {
        Arc::new(AddressStore::new(self.txn.clone()))
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::new(UserStore::new(self.txn.clone()))
    }

    fn artisans(&self) -> Arc<dyn ArtisanRepository> {
        Arc::new(ArtisanStore::new(self.txn.clone()))
    }

    fn buyers(&self) -> Arc<dyn BuyerRepository> {
        Arc::new(BuyerStore::new(self.txn.clone()))
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(CategoryStore::new(self.txn.clone()))
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        Arc::new(ProductStore::new(self.txn.clone()))
    }
}

#[async_trait]
impl TransactionScope for PersistenceTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.into_inner()?.commit().await.map_err(AppError::from)
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let txn = self.into_inner()?;
        if let Err(e) = txn.rollback().await {
            tracing::error!("Transaction rollback failed: {}", e);
            return Err(AppError::from(e));
        }
        Ok(())
    }
}
