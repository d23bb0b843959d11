//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod artisan_product_service;
mod category_service;
pub mod container;
mod user_registration_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use artisan_product_service::{ArtisanProductManager, ArtisanProductService};
pub use category_service::{CategoryCatalog, CategoryService};
pub use user_registration_service::{UserRegistrar, UserRegistrationService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
