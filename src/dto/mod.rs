//! Request and response bodies of the REST API.
//!
//! Requests carry field-level rules checked by the `ValidatedJson`
//! extractor; business rules (password strength, email format, existence
//! checks) live in the services.

pub mod category;
pub mod product;
pub mod user;

pub use category::CategoryResponse;
pub use product::{ProductResponse, RegisterProductRequest};
pub use user::{
    AddressResponse, ArtisanRegistrationResponse, BuyerRegistrationResponse,
    RegisterAddressRequest, RegisterArtisanRequest, RegisterBuyerRequest,
};
