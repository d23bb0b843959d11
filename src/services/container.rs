//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work and hands them out as
//! trait objects.

use std::sync::Arc;

use super::{
    ArtisanProductManager, ArtisanProductService, CategoryCatalog, CategoryService,
    UserRegistrar, UserRegistrationService,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn registration(&self) -> Arc<dyn UserRegistrationService>;

    fn products(&self) -> Arc<dyn ArtisanProductService>;

    fn categories(&self) -> Arc<dyn CategoryService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    registration_service: Arc<dyn UserRegistrationService>,
    product_service: Arc<dyn ArtisanProductService>,
    category_service: Arc<dyn CategoryService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        registration_service: Arc<dyn UserRegistrationService>,
        product_service: Arc<dyn ArtisanProductService>,
        category_service: Arc<dyn CategoryService>,
    ) -> Self {
        Self {
            registration_service,
            product_service,
            category_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            registration_service: Arc::new(UserRegistrar::new(uow.clone())),
            product_service: Arc::new(ArtisanProductManager::new(uow.clone())),
            category_service: Arc::new(CategoryCatalog::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn registration(&self) -> Arc<dyn UserRegistrationService> {
        self.registration_service.clone()
    }

    fn products(&self) -> Arc<dyn ArtisanProductService> {
        self.product_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }
}
