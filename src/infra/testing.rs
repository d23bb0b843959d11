//! In-memory Unit of Work over mocked repositories.
//!
//! Every repository defaults to a bare mock, so any call a test did not
//! expect panics. Use the `with_*` builders to install configured mocks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::repositories::{
    AddressRepository, ArtisanRepository, BuyerRepository, CategoryRepository,
    MockAddressRepository, MockArtisanRepository, MockBuyerRepository, MockCategoryRepository,
    MockProductRepository, MockUserRepository, ProductRepository, UserRepository,
};
use super::unit_of_work::{Repositories, TransactionScope, UnitOfWork};
use crate::errors::AppResult;

#[derive(Clone)]
struct MockSet {
    addresses: Arc<MockAddressRepository>,
    users: Arc<MockUserRepository>,
    artisans: Arc<MockArtisanRepository>,
    buyers: Arc<MockBuyerRepository>,
    categories: Arc<MockCategoryRepository>,
    products: Arc<MockProductRepository>,
}

impl Repositories for MockSet {
    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.addresses.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn artisans(&self) -> Arc<dyn ArtisanRepository> {
        self.artisans.clone()
    }

    fn buyers(&self) -> Arc<dyn BuyerRepository> {
        self.buyers.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }
}

/// Unit of Work whose transactions share the same mocks and only count
/// commits and rollbacks.
pub struct TestUnitOfWork {
    mocks: MockSet,
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUnitOfWork {
    pub fn new() -> Self {
        Self {
            mocks: MockSet {
                addresses: Arc::new(MockAddressRepository::new()),
                users: Arc::new(MockUserRepository::new()),
                artisans: Arc::new(MockArtisanRepository::new()),
                buyers: Arc::new(MockBuyerRepository::new()),
                categories: Arc::new(MockCategoryRepository::new()),
                products: Arc::new(MockProductRepository::new()),
            },
            commits: Arc::new(AtomicUsize::new(0)),
            rollbacks: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_addresses(mut self, repo: MockAddressRepository) -> Self {
        self.mocks.addresses = Arc::new(repo);
        self
    }

    pub fn with_users(mut self, repo: MockUserRepository) -> Self {
        self.mocks.users = Arc::new(repo);
        self
    }

    pub fn with_artisans(mut self, repo: MockArtisanRepository) -> Self {
        self.mocks.artisans = Arc::new(repo);
        self
    }

    pub fn with_buyers(mut self, repo: MockBuyerRepository) -> Self {
        self.mocks.buyers = Arc::new(repo);
        self
    }

    pub fn with_categories(mut self, repo: MockCategoryRepository) -> Self {
        self.mocks.categories = Arc::new(repo);
        self
    }

    pub fn with_products(mut self, repo: MockProductRepository) -> Self {
        self.mocks.products = Arc::new(repo);
        self
    }

    /// Number of committed transactions
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Number of explicitly rolled back transactions
    pub fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

impl Repositories for TestUnitOfWork {
    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.mocks.addresses()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.mocks.users()
    }

    fn artisans(&self) -> Arc<dyn ArtisanRepository> {
        self.mocks.artisans()
    }

    fn buyers(&self) -> Arc<dyn BuyerRepository> {
        self.mocks.buyers()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.mocks.categories()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.mocks.products()
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    async fn begin(&self) -> AppResult<Box<dyn TransactionScope>> {
        Ok(Box::new(TestTransaction {
            mocks: self.mocks.clone(),
            commits: self.commits.clone(),
            rollbacks: self.rollbacks.clone(),
        }))
    }
}

struct TestTransaction {
    mocks: MockSet,
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
}

impl Repositories for TestTransaction {
    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.mocks.addresses()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.mocks.users()
    }

    fn artisans(&self) -> Arc<dyn ArtisanRepository> {
        self.mocks.artisans()
    }

    fn buyers(&self) -> Arc<dyn BuyerRepository> {
        self.mocks.buyers()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.mocks.categories()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.mocks.products()
    }
}

#[async_trait]
impl TransactionScope for TestTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
