//! HTTP request handlers.

pub mod artisan_handler;
pub mod auth_handler;
pub mod category_handler;

pub use artisan_handler::artisan_routes;
pub use auth_handler::auth_routes;
pub use category_handler::category_routes;
