//! Domain layer - Core business entities and logic
//!
//! Plain entities for the marketplace (users and their artisan/buyer roles,
//! addresses, categories, products) plus the `Email` and `Password` value
//! objects that carry the registration validation rules.

pub mod address;
pub mod artisan;
pub mod buyer;
pub mod category;
pub mod email;
pub mod password;
pub mod product;
pub mod user;

pub use address::{Address, NewAddress};
pub use artisan::Artisan;
pub use buyer::Buyer;
pub use category::Category;
pub use email::Email;
pub use password::Password;
pub use product::{NewProduct, Product, ProductStatus};
pub use user::{AccountStatus, User, UserRole};
