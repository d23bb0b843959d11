//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, health probe and migrations
//! - SeaORM-backed repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod unit_of_work;

pub use db::{Database, HealthCheck, Migrator};
pub use repositories::{
    AddressRepository, ArtisanRepository, BuyerRepository, CategoryRepository, ProductRepository,
    UserRepository,
};
pub use unit_of_work::{Persistence, Repositories, TransactionScope, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAddressRepository, MockArtisanRepository, MockBuyerRepository, MockCategoryRepository,
    MockProductRepository, MockUserRepository,
};
