//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{artisan_handler, auth_handler, category_handler};
use crate::dto::{
    AddressResponse, ArtisanRegistrationResponse, BuyerRegistrationResponse, CategoryResponse,
    ProductResponse, RegisterAddressRequest, RegisterArtisanRequest, RegisterBuyerRequest,
    RegisterProductRequest,
};

/// OpenAPI documentation for the Artisan Marketplace API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Artisan Marketplace API",
        version = "0.1.0",
        description = "Registration of artisans and buyers, artisan product catalogs and categories",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Registration endpoints
        auth_handler::register_artisan,
        auth_handler::register_buyer,
        // Product endpoints
        artisan_handler::create_artisan_product,
        artisan_handler::list_artisan_products,
        // Category endpoints
        category_handler::list_categories,
        category_handler::get_category,
    ),
    components(
        schemas(
            RegisterAddressRequest,
            RegisterArtisanRequest,
            RegisterBuyerRequest,
            RegisterProductRequest,
            AddressResponse,
            ArtisanRegistrationResponse,
            BuyerRegistrationResponse,
            CategoryResponse,
            ProductResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Artisan and buyer registration"),
        (name = "Products", description = "Artisan product catalogs"),
        (name = "Categories", description = "Product categories")
    )
)]
pub struct ApiDoc;
