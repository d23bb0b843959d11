//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod artisan;
pub mod buyer;
pub mod category;
pub mod product;
pub mod user;
