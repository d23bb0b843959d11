//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, HealthCheck};
use crate::services::{
    ArtisanProductService, CategoryService, ServiceContainer, Services, UserRegistrationService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Artisan and buyer sign-up
    pub registration_service: Arc<dyn UserRegistrationService>,
    /// Artisan product catalog
    pub product_service: Arc<dyn ArtisanProductService>,
    pub category_service: Arc<dyn CategoryService>,
    /// Probe behind `/health`
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Build every service over the database connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Take the services out of a container.
    pub fn from_container(container: &dyn ServiceContainer, health: Arc<dyn HealthCheck>) -> Self {
        Self {
            registration_service: container.registration(),
            product_service: container.products(),
            category_service: container.categories(),
            health,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        registration_service: Arc<dyn UserRegistrationService>,
        product_service: Arc<dyn ArtisanProductService>,
        category_service: Arc<dyn CategoryService>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            registration_service,
            product_service,
            category_service,
            health,
        }
    }
}
