//! End-to-end flows through the router and the real services.
//!
//! Repositories are backed by an in-memory store that enforces the same
//! uniqueness rules as the database schema. Transactions share the store
//! without isolation, which is enough for sequential tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use artisan_marketplace::api::{create_router, AppState};
use artisan_marketplace::domain::{Address, Artisan, Buyer, Category, Product, User};
use artisan_marketplace::errors::{AppError, AppResult};
use artisan_marketplace::infra::{
    AddressRepository, ArtisanRepository, BuyerRepository, CategoryRepository, HealthCheck,
    ProductRepository, Repositories, TransactionScope, UnitOfWork, UserRepository,
};
use artisan_marketplace::services::{ArtisanProductManager, CategoryCatalog, UserRegistrar};

// =============================================================================
// In-memory persistence
// =============================================================================

#[derive(Default)]
struct MemoryDb {
    addresses: Mutex<Vec<Address>>,
    users: Mutex<Vec<User>>,
    artisans: Mutex<Vec<Artisan>>,
    buyers: Mutex<Vec<Buyer>>,
    categories: Mutex<Vec<Category>>,
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl AddressRepository for MemoryDb {
    async fn save(&self, address: &Address) -> AppResult<Address> {
        self.addresses.lock().unwrap().push(address.clone());
        Ok(address.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Address>> {
        Ok(self.addresses.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn get_by_attributes(&self, address: &Address) -> AppResult<Option<Address>> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.same_place(address))
            .cloned())
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn save(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateEmail);
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl ArtisanRepository for MemoryDb {
    async fn save(&self, artisan: &Artisan) -> AppResult<Artisan> {
        self.artisans.lock().unwrap().push(artisan.clone());
        Ok(artisan.clone())
    }

    async fn get_artisan_by_id(&self, id: Uuid) -> AppResult<Option<Artisan>> {
        Ok(self
            .artisans
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.artisan_id == id)
            .cloned())
    }
}

#[async_trait]
impl BuyerRepository for MemoryDb {
    async fn save(&self, buyer: &Buyer) -> AppResult<Buyer> {
        self.buyers.lock().unwrap().push(buyer.clone());
        Ok(buyer.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Buyer>> {
        Ok(self.buyers.lock().unwrap().iter().find(|b| b.buyer_id == id).cloned())
    }
}

#[async_trait]
impl CategoryRepository for MemoryDb {
    async fn create(&self, category: &Category) -> AppResult<Category> {
        self.categories.lock().unwrap().push(category.clone());
        Ok(category.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[async_trait]
impl ProductRepository for MemoryDb {
    async fn create(&self, product: &Product) -> AppResult<Product> {
        let mut products = self.products.lock().unwrap();
        if products
            .iter()
            .any(|p| p.artisan_id == product.artisan_id && p.name == product.name)
        {
            return Err(AppError::DuplicateProductName);
        }
        products.push(product.clone());
        Ok(product.clone())
    }

    async fn get_product_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn get_artisan_product_by_name(
        &self,
        artisan_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.artisan_id == artisan_id && p.name == name)
            .cloned())
    }

    async fn find_by_artisan_id(&self, artisan_id: Uuid) -> AppResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.artisan_id == artisan_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HealthCheck for MemoryDb {
    async fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Clone)]
struct MemoryUnitOfWork {
    db: Arc<MemoryDb>,
}

impl Repositories for MemoryUnitOfWork {
    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.db.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.db.clone()
    }

    fn artisans(&self) -> Arc<dyn ArtisanRepository> {
        self.db.clone()
    }

    fn buyers(&self) -> Arc<dyn BuyerRepository> {
        self.db.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.db.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.db.clone()
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn begin(&self) -> AppResult<Box<dyn TransactionScope>> {
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl TransactionScope for MemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

struct Marketplace {
    router: Router,
    db: Arc<MemoryDb>,
    ceramics: Category,
    wood: Category,
}

fn marketplace() -> Marketplace {
    let db = Arc::new(MemoryDb::default());
    let ceramics = Category::new("Cerâmica", None);
    let wood = Category::new("Madeira", None);
    db.categories
        .lock()
        .unwrap()
        .extend([ceramics.clone(), wood.clone()]);

    let uow = Arc::new(MemoryUnitOfWork { db: db.clone() });
    let state = AppState::new(
        Arc::new(UserRegistrar::new(uow.clone())),
        Arc::new(ArtisanProductManager::new(uow.clone())),
        Arc::new(CategoryCatalog::new(uow)),
        db.clone(),
    );

    Marketplace {
        router: create_router(state),
        db,
        ceramics,
        wood,
    }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn address() -> Value {
    json!({
        "street": "Rua das Flores",
        "number": "123",
        "neighborhood": "Centro",
        "city": "Salvador",
        "state": "ba",
        "zip_code": "40000-000"
    })
}

async fn register_artisan(m: &Marketplace, email: &str) -> Value {
    let (status, body) = send(
        &m.router,
        Method::POST,
        "/api/auth/register/artisan",
        Some(json!({
            "email": email,
            "password": "SecurePass123!",
            "store_name": "Ateliê Barro Vivo",
            "address": address()
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_artisan_and_buyer_share_one_address() {
    let m = marketplace();

    let artisan = register_artisan(&m, "artisan@example.com").await;
    let (status, buyer) = send(
        &m.router,
        Method::POST,
        "/api/auth/register/buyer",
        Some(json!({
            "email": "buyer@example.com",
            "password": "SecurePass123!",
            "full_name": "Maria Souza",
            "address": address()
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(artisan["address"]["address_id"], buyer["address"]["address_id"]);
    assert_eq!(artisan["address"]["state"], "BA");
    assert_eq!(artisan["address"]["country"], "Brasil");
    assert_eq!(m.db.addresses.lock().unwrap().len(), 1);
    assert_eq!(m.db.users.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_address_fields_are_trimmed_before_checks() {
    let m = marketplace();
    let mut blank_street = address();
    blank_street["street"] = json!("   ");

    let (status, body) = send(
        &m.router,
        Method::POST,
        "/api/auth/register/buyer",
        Some(json!({
            "email": "buyer@example.com",
            "password": "SecurePass123!",
            "full_name": "Maria Souza",
            "address": blank_street
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Street is required");
    assert!(m.db.addresses.lock().unwrap().is_empty());
    assert!(m.db.users.lock().unwrap().is_empty());

    let mut padded = address();
    padded["state"] = json!(" ba ");
    padded["street"] = json!("  Rua das Flores ");
    let (status, body) = send(
        &m.router,
        Method::POST,
        "/api/auth/register/buyer",
        Some(json!({
            "email": "buyer@example.com",
            "password": "SecurePass123!",
            "full_name": "Maria Souza",
            "address": padded
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["address"]["state"], "BA");
    assert_eq!(body["address"]["street"], "Rua das Flores");
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let m = marketplace();
    register_artisan(&m, "artisan@example.com").await;

    let users = m.db.users.lock().unwrap();
    assert_ne!(users[0].password_hash, "SecurePass123!");
    assert!(users[0].password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_duplicate_email_leaves_no_extra_rows() {
    let m = marketplace();
    register_artisan(&m, "artisan@example.com").await;

    let (status, body) = send(
        &m.router,
        Method::POST,
        "/api/auth/register/buyer",
        Some(json!({
            "email": "artisan@example.com",
            "password": "SecurePass123!",
            "full_name": "Outra Pessoa"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered.");
    assert_eq!(m.db.users.lock().unwrap().len(), 1);
    assert!(m.db.buyers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_product_catalog_flow() {
    let m = marketplace();
    let artisan = register_artisan(&m, "artisan@example.com").await;
    let uri = format!("/api/artisan/{}/products", artisan["user_id"].as_str().unwrap());

    let (status, body) = send(&m.router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for (name, category) in [("Vaso", &m.ceramics), ("Colher de pau", &m.wood)] {
        let (status, body) = send(
            &m.router,
            Method::POST,
            &uri,
            Some(json!({ "name": name, "price": "25.00", "category_id": category.id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["stock"], 0);
    }

    let (status, body) = send(
        &m.router,
        Method::POST,
        &uri,
        Some(json!({ "name": "Vaso", "price": 30, "category_id": m.wood.id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_PRODUCT");

    let (status, body) = send(&m.router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let categories: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["category"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Cerâmica", "Madeira"]);
}

#[tokio::test]
async fn test_buyer_cannot_publish_products() {
    let m = marketplace();
    let (_, buyer) = send(
        &m.router,
        Method::POST,
        "/api/auth/register/buyer",
        Some(json!({
            "email": "buyer@example.com",
            "password": "SecurePass123!",
            "full_name": "Maria Souza"
        })),
    )
    .await;

    let uri = format!("/api/artisan/{}/products", buyer["user_id"].as_str().unwrap());
    let (status, body) = send(
        &m.router,
        Method::POST,
        &uri,
        Some(json!({ "name": "Vaso", "price": 10, "category_id": m.ceramics.id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Artisan not found");
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let m = marketplace();
    let artisan = register_artisan(&m, "artisan@example.com").await;
    let uri = format!("/api/artisan/{}/products", artisan["user_id"].as_str().unwrap());

    let (status, body) = send(
        &m.router,
        Method::POST,
        &uri,
        Some(json!({ "name": "Vaso", "price": -1, "category_id": m.ceramics.id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product data");
    assert!(m.db.products.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_price_bounded_by_column_precision() {
    let m = marketplace();
    let artisan = register_artisan(&m, "artisan@example.com").await;
    let uri = format!("/api/artisan/{}/products", artisan["user_id"].as_str().unwrap());

    for price in [json!(100000000), json!("99999999.995")] {
        let (status, body) = send(
            &m.router,
            Method::POST,
            &uri,
            Some(json!({ "name": "Tapete", "price": price, "category_id": m.wood.id })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
        assert_eq!(body["message"], "Invalid product data");
    }
    assert!(m.db.products.lock().unwrap().is_empty());

    let (status, body) = send(
        &m.router,
        Method::POST,
        &uri,
        Some(json!({ "name": "Tapete", "price": "99999999.99", "category_id": m.wood.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["price"], json!(99999999.99));
}

#[tokio::test]
async fn test_categories_listed_by_name() {
    let m = marketplace();
    let (status, body) = send(&m.router, Method::GET, "/api/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cerâmica", "Madeira"]);
}
