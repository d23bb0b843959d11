//! Registration DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::{Address, Artisan, Buyer, NewAddress, User, UserRole};

/// Postal address sent with a registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterAddressRequest {
    #[validate(
        custom(function = "not_blank", message = "Street is required"),
        length(max = 255, message = "Street must be at most 255 characters")
    )]
    #[schema(example = "Rua das Flores")]
    pub street: String,
    #[validate(length(max = 20, message = "Number must be at most 20 characters"))]
    #[schema(example = "123")]
    pub number: Option<String>,
    #[validate(length(max = 100, message = "Complement must be at most 100 characters"))]
    #[schema(example = "Apto 4B")]
    pub complement: Option<String>,
    #[validate(
        custom(function = "not_blank", message = "Neighborhood is required"),
        length(max = 100, message = "Neighborhood must be at most 100 characters")
    )]
    #[schema(example = "Centro")]
    pub neighborhood: String,
    #[validate(
        custom(function = "not_blank", message = "City is required"),
        length(max = 100, message = "City must be at most 100 characters")
    )]
    #[schema(example = "Salvador")]
    pub city: String,
    /// Two-letter state code, surrounding whitespace ignored
    #[validate(custom(function = "state_code", message = "State must be a 2-letter code"))]
    #[schema(example = "BA")]
    pub state: String,
    #[validate(
        custom(function = "not_blank", message = "Zip code is required"),
        length(max = 10, message = "Zip code must be at most 10 characters")
    )]
    #[schema(example = "40000-000")]
    pub zip_code: String,
    /// Defaults to `Brasil`
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    #[schema(example = "Brasil")]
    pub country: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn state_code(value: &str) -> Result<(), ValidationError> {
    let code = value.trim();
    if code.chars().count() != 2 || !code.chars().all(char::is_alphabetic) {
        return Err(ValidationError::new("state_code"));
    }
    Ok(())
}

impl From<RegisterAddressRequest> for NewAddress {
    fn from(req: RegisterAddressRequest) -> Self {
        NewAddress {
            street: req.street,
            number: req.number,
            complement: req.complement,
            neighborhood: req.neighborhood,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            country: req.country,
        }
    }
}

/// Artisan registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterArtisanRequest {
    /// Format is checked by the registration service
    #[validate(length(max = 120, message = "Email must be at most 120 characters"))]
    #[schema(example = "artisan@example.com")]
    pub email: String,
    /// Strength rules are checked by the registration service
    #[validate(length(max = 64, message = "Password must be at most 64 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8, max_length = 64)]
    pub password: String,
    #[validate(length(min = 1, max = 255, message = "Store name is required (max 255 characters)"))]
    #[schema(example = "Ateliê Barro Vivo")]
    pub store_name: String,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    #[schema(example = "71999998888")]
    pub phone: Option<String>,
    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    #[schema(example = "Crio peças únicas em cerâmica, inspiradas na natureza local.")]
    pub bio: Option<String>,
    #[validate(nested)]
    pub address: Option<RegisterAddressRequest>,
}

/// Buyer registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterBuyerRequest {
    #[validate(length(max = 120, message = "Email must be at most 120 characters"))]
    #[schema(example = "buyer@example.com")]
    pub email: String,
    #[validate(length(max = 64, message = "Password must be at most 64 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8, max_length = 64)]
    pub password: String,
    #[validate(length(min = 1, max = 255, message = "Full name is required (max 255 characters)"))]
    #[schema(example = "Maria Souza")]
    pub full_name: String,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    #[schema(example = "11988887777")]
    pub phone: Option<String>,
    #[validate(nested)]
    pub address: Option<RegisterAddressRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressResponse {
    pub address_id: Uuid,
    pub street: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            address_id: address.id,
            street: address.street,
            number: address.number,
            complement: address.complement,
            neighborhood: address.neighborhood,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
        }
    }
}

/// Newly registered artisan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtisanRegistrationResponse {
    pub user_id: Uuid,
    pub email: String,
    pub store_name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub registration_date: DateTime<Utc>,
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = "artisan")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressResponse>,
}

impl ArtisanRegistrationResponse {
    pub fn new(user: User, artisan: Artisan, address: Option<Address>) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            store_name: artisan.store_name,
            phone: artisan.phone,
            bio: artisan.bio,
            registration_date: user.registration_date,
            status: user.status.to_string(),
            role: UserRole::Artisan.to_string(),
            address: address.map(AddressResponse::from),
        }
    }
}

/// Newly registered buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BuyerRegistrationResponse {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub registration_date: DateTime<Utc>,
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = "buyer")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressResponse>,
}

impl BuyerRegistrationResponse {
    pub fn new(user: User, buyer: Buyer, address: Option<Address>) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            full_name: buyer.full_name,
            phone: buyer.phone,
            registration_date: user.registration_date,
            status: user.status.to_string(),
            role: UserRole::Buyer.to_string(),
            address: address.map(AddressResponse::from),
        }
    }
}
