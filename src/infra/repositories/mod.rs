//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Every store is generic over the SeaORM connection so the same code runs
//! against the pool or inside a transaction.

mod address_repository;
mod artisan_repository;
mod buyer_repository;
mod category_repository;
pub(crate) mod entities;
mod product_repository;
mod user_repository;

pub use address_repository::{AddressRepository, AddressStore};
pub use artisan_repository::{ArtisanRepository, ArtisanStore};
pub use buyer_repository::{BuyerRepository, BuyerStore};
pub use category_repository::{CategoryRepository, CategoryStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use address_repository::MockAddressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use artisan_repository::MockArtisanRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use buyer_repository::MockBuyerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
