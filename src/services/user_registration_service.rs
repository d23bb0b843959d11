//! User registration service - Handles artisan and buyer sign-up.
//!
//! Every rule (email format, duplicate email, password strength, required
//! fields) is checked before the first write. The address, the user and the
//! role profile are then saved in one transaction.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Address, Artisan, Buyer, Email, Password, User};
use crate::dto::{
    ArtisanRegistrationResponse, BuyerRegistrationResponse, RegisterAddressRequest,
    RegisterArtisanRequest, RegisterBuyerRequest,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{TransactionScope, UnitOfWork};

/// Registration service trait for dependency injection.
#[async_trait]
pub trait UserRegistrationService: Send + Sync {
    /// Register a user with the artisan role.
    ///
    /// # Errors
    /// [`AppError::InvalidEmailFormat`], [`AppError::DuplicateEmail`],
    /// [`AppError::InvalidPassword`] or [`AppError::Validation`]; no row is
    /// written in any of these cases.
    async fn register_artisan(
        &self,
        request: RegisterArtisanRequest,
    ) -> AppResult<ArtisanRegistrationResponse>;

    /// Register a user with the buyer role. Same rules as artisans.
    async fn register_buyer(
        &self,
        request: RegisterBuyerRequest,
    ) -> AppResult<BuyerRegistrationResponse>;
}

/// Concrete implementation of UserRegistrationService using Unit of Work.
pub struct UserRegistrar<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserRegistrar<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Email format, then uniqueness, then password strength.
    async fn check_credentials(&self, email: &str, password: &str) -> AppResult<(Email, Password)> {
        let email = Email::parse(email)?;

        if self.uow.users().get_by_email(email.as_str()).await?.is_some() {
            tracing::debug!(email = %email, "Registration rejected: email already registered");
            return Err(AppError::DuplicateEmail);
        }

        let password = Password::new(password)?;
        Ok((email, password))
    }
}

#[async_trait]
impl<U: UnitOfWork> UserRegistrationService for UserRegistrar<U> {
    async fn register_artisan(
        &self,
        request: RegisterArtisanRequest,
    ) -> AppResult<ArtisanRegistrationResponse> {
        let (email, password) = self
            .check_credentials(&request.email, &request.password)
            .await?;
        let store_name = required(request.store_name, "Store name is required")?;

        let tx = self.uow.begin().await?;
        let written = async {
            let address = resolve_address(tx.as_ref(), request.address).await?;
            let user = tx
                .users()
                .save(&User::new(email, password, address.as_ref().map(|a| a.id)))
                .await?;
            let artisan = tx
                .artisans()
                .save(&Artisan::new(
                    user.id,
                    store_name,
                    non_blank(request.phone),
                    non_blank(request.bio),
                ))
                .await?;
            Ok::<_, AppError>((user, artisan, address))
        }
        .await;
        let (user, artisan, address) = finish(tx, written).await?;

        tracing::info!(user_id = %user.id, "Artisan registered");
        Ok(ArtisanRegistrationResponse::new(user, artisan, address))
    }

    async fn register_buyer(
        &self,
        request: RegisterBuyerRequest,
    ) -> AppResult<BuyerRegistrationResponse> {
        let (email, password) = self
            .check_credentials(&request.email, &request.password)
            .await?;
        let full_name = required(request.full_name, "Full name is required")?;

        let tx = self.uow.begin().await?;
        let written = async {
            let address = resolve_address(tx.as_ref(), request.address).await?;
            let user = tx
                .users()
                .save(&User::new(email, password, address.as_ref().map(|a| a.id)))
                .await?;
            let buyer = tx
                .buyers()
                .save(&Buyer::new(user.id, full_name, non_blank(request.phone)))
                .await?;
            Ok::<_, AppError>((user, buyer, address))
        }
        .await;
        let (user, buyer, address) = finish(tx, written).await?;

        tracing::info!(user_id = %user.id, "Buyer registered");
        Ok(BuyerRegistrationResponse::new(user, buyer, address))
    }
}

/// Commit when every write succeeded, otherwise roll back and return the
/// write error.
async fn finish<T>(tx: Box<dyn TransactionScope>, written: AppResult<T>) -> AppResult<T> {
    match written {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Registration rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Reuse an address sharing the dedup key, or insert a new one.
async fn resolve_address(
    tx: &dyn TransactionScope,
    request: Option<RegisterAddressRequest>,
) -> AppResult<Option<Address>> {
    let Some(request) = request else {
        return Ok(None);
    };

    let candidate = Address::new(request.into());
    if let Some(existing) = tx.addresses().get_by_attributes(&candidate).await? {
        tracing::debug!(address_id = %existing.id, "Reusing existing address");
        return Ok(Some(existing));
    }

    let saved = tx.addresses().save(&candidate).await?;
    Ok(Some(saved))
}

fn required(value: String, message: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewAddress;
    use crate::infra::testing::TestUnitOfWork;
    use crate::infra::{
        MockAddressRepository, MockArtisanRepository, MockBuyerRepository, MockUserRepository,
    };
    use mockall::predicate::eq;

    fn address_request() -> RegisterAddressRequest {
        RegisterAddressRequest {
            street: "Rua das Flores".into(),
            number: Some("123".into()),
            complement: None,
            neighborhood: "Centro".into(),
            city: "Salvador".into(),
            state: "BA".into(),
            zip_code: "40000-000".into(),
            country: None,
        }
    }

    fn artisan_request(email: &str, password: &str) -> RegisterArtisanRequest {
        RegisterArtisanRequest {
            email: email.into(),
            password: password.into(),
            store_name: "Ateliê Barro Vivo".into(),
            phone: Some("71999998888".into()),
            bio: None,
            address: Some(address_request()),
        }
    }

    fn buyer_request(email: &str) -> RegisterBuyerRequest {
        RegisterBuyerRequest {
            email: email.into(),
            password: "SecurePass123!".into(),
            full_name: "Maria Souza".into(),
            phone: None,
            address: Some(address_request()),
        }
    }

    fn existing_user(email: &str) -> User {
        User::new(
            Email::parse(email).unwrap(),
            Password::from_hash("$argon2id$stub".into()),
            None,
        )
    }

    fn users_without(email: &'static str) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .with(eq(email))
            .times(1)
            .returning(|_| Ok(None));
        users
    }

    #[tokio::test]
    async fn test_register_artisan_success() {
        let mut users = users_without("artisan@example.com");
        users
            .expect_save()
            .times(1)
            .returning(|user| Ok(user.clone()));

        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_get_by_attributes()
            .times(1)
            .returning(|_| Ok(None));
        addresses
            .expect_save()
            .times(1)
            .returning(|address| Ok(address.clone()));

        let mut artisans = MockArtisanRepository::new();
        artisans
            .expect_save()
            .times(1)
            .returning(|artisan| Ok(artisan.clone()));

        let uow = Arc::new(
            TestUnitOfWork::new()
                .with_users(users)
                .with_addresses(addresses)
                .with_artisans(artisans),
        );
        let service = UserRegistrar::new(uow.clone());

        let response = service
            .register_artisan(artisan_request("artisan@example.com", "SecurePass123!"))
            .await
            .unwrap();

        assert_eq!(response.email, "artisan@example.com");
        assert_eq!(response.store_name, "Ateliê Barro Vivo");
        assert_eq!(response.role, "artisan");
        assert_eq!(response.status, "active");
        let address = response.address.unwrap();
        assert_eq!(address.country, "Brasil");
        assert_eq!(uow.commits(), 1);
        assert_eq!(uow.rollbacks(), 0);
    }

    #[tokio::test]
    async fn test_register_buyer_success() {
        let mut users = users_without("buyer@example.com");
        users
            .expect_save()
            .times(1)
            .returning(|user| Ok(user.clone()));

        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_get_by_attributes()
            .returning(|_| Ok(None));
        addresses
            .expect_save()
            .returning(|address| Ok(address.clone()));

        let mut buyers = MockBuyerRepository::new();
        buyers
            .expect_save()
            .times(1)
            .returning(|buyer| Ok(buyer.clone()));

        let uow = Arc::new(
            TestUnitOfWork::new()
                .with_users(users)
                .with_addresses(addresses)
                .with_buyers(buyers),
        );
        let service = UserRegistrar::new(uow.clone());

        let response = service
            .register_buyer(buyer_request("buyer@example.com"))
            .await
            .unwrap();

        assert_eq!(response.full_name, "Maria Souza");
        assert_eq!(response.role, "buyer");
        assert_eq!(uow.commits(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_writes() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .with(eq("taken@example.com"))
            .times(1)
            .returning(|email| Ok(Some(existing_user(email))));
        users.expect_save().never();

        let uow = Arc::new(TestUnitOfWork::new().with_users(users));
        let service = UserRegistrar::new(uow.clone());

        let err = service
            .register_artisan(artisan_request("taken@example.com", "SecurePass123!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(err.to_string(), "Email already registered.");
        assert_eq!(uow.commits(), 0);
        assert_eq!(uow.rollbacks(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_before_lookup() {
        // Bare mocks: any repository call would panic
        let uow = Arc::new(TestUnitOfWork::new());
        let service = UserRegistrar::new(uow.clone());

        for email in ["plainaddress", "user@domain", "user@domain..com"] {
            let err = service.register_buyer(buyer_request(email)).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidEmailFormat), "{email}");
        }
        assert_eq!(uow.commits(), 0);
    }

    #[tokio::test]
    async fn test_each_password_rule_rejected_without_writes() {
        let cases = [
            ("short1!", "at least 8 characters"),
            ("nouppercase123$", "uppercase"),
            ("NOLOWERCASE123$", "lowercase"),
            ("NoNumbers$$", "number"),
            ("NoSpecialChars123", "special character"),
        ];

        for (password, rule) in cases {
            let mut users = MockUserRepository::new();
            users.expect_get_by_email().returning(|_| Ok(None));
            users.expect_save().never();

            let uow = Arc::new(TestUnitOfWork::new().with_users(users));
            let service = UserRegistrar::new(uow.clone());

            let err = service
                .register_artisan(artisan_request("artisan@example.com", password))
                .await
                .unwrap_err();

            match err {
                AppError::InvalidPassword(msg) => {
                    assert!(msg.contains("Password"), "{password}: {msg}");
                    assert!(msg.contains(rule), "{password}: {msg}");
                }
                other => panic!("{password}: expected InvalidPassword, got {:?}", other),
            }
            assert_eq!(uow.commits(), 0);
        }
    }

    #[tokio::test]
    async fn test_blank_store_name_rejected_without_writes() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Ok(None));

        let uow = Arc::new(TestUnitOfWork::new().with_users(users));
        let service = UserRegistrar::new(uow.clone());

        let mut request = artisan_request("artisan@example.com", "SecurePass123!");
        request.store_name = "   ".into();

        let err = service.register_artisan(request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(uow.commits(), 0);
    }

    #[tokio::test]
    async fn test_matching_address_is_reused() {
        let existing = Address::new(NewAddress::from(address_request()));
        let existing_id = existing.id;

        let mut addresses = MockAddressRepository::new();
        addresses
            .expect_get_by_attributes()
            .withf(|candidate| candidate.street == "Rua das Flores" && candidate.state == "BA")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        addresses.expect_save().never();

        let mut users = users_without("second@example.com");
        users
            .expect_save()
            .withf(move |user| user.address_id == Some(existing_id))
            .times(1)
            .returning(|user| Ok(user.clone()));

        let mut buyers = MockBuyerRepository::new();
        buyers.expect_save().returning(|buyer| Ok(buyer.clone()));

        let uow = Arc::new(
            TestUnitOfWork::new()
                .with_addresses(addresses)
                .with_users(users)
                .with_buyers(buyers),
        );
        let service = UserRegistrar::new(uow);

        let response = service
            .register_buyer(buyer_request("second@example.com"))
            .await
            .unwrap();

        assert_eq!(response.address.unwrap().address_id, existing_id);
    }

    #[tokio::test]
    async fn test_registration_without_address() {
        let mut users = users_without("noaddress@example.com");
        users
            .expect_save()
            .withf(|user| user.address_id.is_none())
            .returning(|user| Ok(user.clone()));

        let mut artisans = MockArtisanRepository::new();
        artisans
            .expect_save()
            .withf(|artisan| artisan.phone.as_deref() == Some("71999998888"))
            .returning(|artisan| Ok(artisan.clone()));

        let uow = Arc::new(TestUnitOfWork::new().with_users(users).with_artisans(artisans));
        let service = UserRegistrar::new(uow);

        let mut request = artisan_request("noaddress@example.com", "SecurePass123!");
        request.address = None;

        let response = service.register_artisan(request).await.unwrap();
        assert!(response.address.is_none());
    }

    #[tokio::test]
    async fn test_failed_role_insert_rolls_back() {
        let mut users = users_without("artisan@example.com");
        users.expect_save().returning(|user| Ok(user.clone()));

        let mut addresses = MockAddressRepository::new();
        addresses.expect_get_by_attributes().returning(|_| Ok(None));
        addresses.expect_save().returning(|address| Ok(address.clone()));

        let mut artisans = MockArtisanRepository::new();
        artisans
            .expect_save()
            .returning(|_| Err(AppError::internal("insert failed")));

        let uow = Arc::new(
            TestUnitOfWork::new()
                .with_users(users)
                .with_addresses(addresses)
                .with_artisans(artisans),
        );
        let service = UserRegistrar::new(uow.clone());

        let result = service
            .register_artisan(artisan_request("artisan@example.com", "SecurePass123!"))
            .await;

        assert!(result.is_err());
        assert_eq!(uow.commits(), 0);
        assert_eq!(uow.rollbacks(), 1);
    }
}
