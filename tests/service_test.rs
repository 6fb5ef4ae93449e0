//! Service tests over in-memory repositories.
//!
//! Exercises the real managers end to end (validation, duplicate checks,
//! hashing, existence probes) without a MongoDB server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use customer_registry::domain::{
    CreateCustomer, CreateUser, Customer, PartialUpdate, Password, UpdateOutcome, UpdateUser, User,
};
use customer_registry::errors::{StoreError, StoreResult};
use customer_registry::infra::{CustomerRepository, OpContext, UserRepository};
use customer_registry::services::{CustomerService, ServiceContainer, Services, UserService};
use customer_registry::types::{paginate, Page, PageRequest};

// =============================================================================
// In-memory repositories
// =============================================================================

fn slice<T: Clone>(items: &[T], page: PageRequest) -> Page<T> {
    let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
    Page {
        total_count: items.len() as u64,
        items: items.iter().skip(offset).take(limit).cloned().collect(),
    }
}

#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    fn all(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_page(&self, _ctx: &OpContext, page: PageRequest) -> StoreResult<Page<User>> {
        Ok(slice(&self.rows.lock().unwrap(), page))
    }

    async fn find_by_user_id(&self, _ctx: &OpContext, user_id: &str) -> StoreResult<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or(StoreError::NoDocuments)
    }

    async fn exists(&self, _ctx: &OpContext, user_id: &str) -> StoreResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|u| u.user_id == user_id))
    }

    async fn count_by_key(&self, _ctx: &OpContext, key: &str, value: &str) -> StoreResult<u64> {
        let rows = self.rows.lock().unwrap();
        let count = match key {
            "email" => rows.iter().filter(|u| u.email == value).count(),
            "phone" => rows.iter().filter(|u| u.phone == value).count(),
            other => return Err(StoreError::UnsupportedKey(other.to_string())),
        };
        Ok(count as u64)
    }

    async fn insert(&self, _ctx: &OpContext, user: User) -> StoreResult<()> {
        self.rows.lock().unwrap().push(user);
        Ok(())
    }

    async fn update(
        &self,
        _ctx: &OpContext,
        user_id: &str,
        update: PartialUpdate,
    ) -> StoreResult<UpdateOutcome> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.user_id == user_id) else {
            return Ok(UpdateOutcome::default());
        };
        for (key, value) in update.fields() {
            match *key {
                "first_name" => user.first_name = value.clone(),
                "last_name" => user.last_name = value.clone(),
                _ => {}
            }
        }
        user.updated_at = update.updated_at();
        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn delete(&self, _ctx: &OpContext, user_id: &str) -> StoreResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
struct InMemoryCustomers {
    rows: Mutex<Vec<Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_page(&self, _ctx: &OpContext, page: PageRequest) -> StoreResult<Page<Customer>> {
        Ok(slice(&self.rows.lock().unwrap(), page))
    }

    async fn find_page_by_user_id(
        &self,
        _ctx: &OpContext,
        user_id: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Customer>> {
        let owned: Vec<Customer> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        Ok(slice(&owned, page))
    }

    async fn find_by_customer_id(
        &self,
        _ctx: &OpContext,
        customer_id: &str,
    ) -> StoreResult<Customer> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.customer_id == customer_id)
            .cloned()
            .ok_or(StoreError::NoDocuments)
    }

    async fn insert(&self, _ctx: &OpContext, customer: Customer) -> StoreResult<()> {
        self.rows.lock().unwrap().push(customer);
        Ok(())
    }

    async fn update(
        &self,
        _ctx: &OpContext,
        customer_id: &str,
        update: PartialUpdate,
    ) -> StoreResult<UpdateOutcome> {
        let mut rows = self.rows.lock().unwrap();
        let Some(customer) = rows.iter_mut().find(|c| c.customer_id == customer_id) else {
            return Ok(UpdateOutcome::default());
        };
        if let Some(first_name) = update.get("first_name") {
            customer.first_name = first_name.to_string();
        }
        if let Some(last_name) = update.get("last_name") {
            customer.last_name = last_name.to_string();
        }
        customer.updated_at = update.updated_at();
        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn delete(&self, _ctx: &OpContext, customer_id: &str) -> StoreResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.customer_id != customer_id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_by_user_id(&self, _ctx: &OpContext, user_id: &str) -> StoreResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

struct Fixture {
    services: Services,
    users: Arc<InMemoryUsers>,
}

fn fixture() -> Fixture {
    let users = Arc::new(InMemoryUsers::default());
    let customers = Arc::new(InMemoryCustomers::default());
    Fixture {
        services: Services::from_repositories(users.clone(), customers),
        users,
    }
}

fn jo() -> CreateUser {
    CreateUser {
        first_name: Some("Jo".into()),
        last_name: Some("Lin".into()),
        password: Some("secret1".into()),
        email: Some("jo@example.com".into()),
        phone: Some("555-0100".into()),
    }
}

fn ada() -> CreateCustomer {
    CreateCustomer {
        first_name: Some("Ada".into()),
        last_name: Some("Byron".into()),
        user_id: None,
    }
}

async fn registered(fixture: &Fixture) -> String {
    fixture
        .services
        .users()
        .add_user(jo())
        .await
        .data
        .expect("user is created")
}

// =============================================================================
// User flows
// =============================================================================

#[tokio::test]
async fn test_add_then_fetch_stores_hashed_password() {
    let fx = fixture();
    let user_id = registered(&fx).await;

    let fetched = fx.services.users().get_user(&user_id).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.data.unwrap().email, "jo@example.com");

    let stored = fx.users.all().pop().unwrap();
    assert_ne!(stored.password, "secret1");
    assert!(Password::from_hash(stored.password.clone()).verify("secret1").is_ok());
    assert!(Password::from_hash(stored.password).verify("secret2").is_err());
}

#[tokio::test]
async fn test_repeat_registration_is_rejected() {
    let fx = fixture();
    registered(&fx).await;

    let again = fx.services.users().add_user(jo()).await;

    assert_eq!(again.status, 500);
    assert_eq!(again.message, "User with this e-mail or phone already exists");
    assert_eq!(fx.users.all().len(), 1);
}

#[tokio::test]
async fn test_listing_pages_through_users() {
    let fx = fixture();
    for i in 0..3 {
        let request = CreateUser {
            email: Some(format!("user{i}@example.com")),
            phone: Some(format!("555-010{i}")),
            ..jo()
        };
        assert_eq!(fx.services.users().add_user(request).await.status, 200);
    }

    let page = fx
        .services
        .users()
        .list_users(paginate(Some("2"), Some("2")))
        .await
        .data
        .unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn test_empty_collection_lists_no_records() {
    let fx = fixture();
    let envelope = fx.services.users().list_users(paginate(Some("1"), Some("10"))).await;

    assert_eq!(envelope.status, 500);
    assert_eq!(envelope.message, "No Records Found");
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let fx = fixture();
    let user_id = registered(&fx).await;

    let request = UpdateUser {
        first_name: None,
        last_name: Some("Park".into()),
    };
    let envelope = fx.services.users().update_user(&user_id, request).await;
    assert_eq!(envelope.status, 200);

    let stored = fx.users.all().pop().unwrap();
    assert_eq!(stored.first_name, "Jo");
    assert_eq!(stored.last_name, "Park");
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let fx = fixture();
    let user_id = registered(&fx).await;

    assert_eq!(fx.services.users().delete_user(&user_id).await.status, 200);
    assert_eq!(fx.services.users().delete_user(&user_id).await.status, 404);
}

// =============================================================================
// Customer flows
// =============================================================================

#[tokio::test]
async fn test_customer_lifecycle_under_existing_user() {
    let fx = fixture();
    let user_id = registered(&fx).await;
    let customers = fx.services.customers();

    let created = customers.add_customer(&user_id, ada()).await.data.unwrap();
    assert_eq!(created.user_id, user_id);

    let fetched = customers
        .get_customer(&user_id, &created.customer_id)
        .await;
    assert_eq!(fetched.data.unwrap().first_name, "Ada");

    let listed = customers
        .list_customers_by_user(&user_id, PageRequest::default())
        .await;
    assert_eq!(listed.data.unwrap().total_count, 1);

    let removed = customers.delete_customers_by_user(&user_id).await;
    assert_eq!(removed.data.unwrap().deleted_count, 1);
}

#[tokio::test]
async fn test_customer_for_unknown_user_is_refused() {
    let fx = fixture();
    let envelope = fx.services.customers().add_customer("ghost", ada()).await;

    assert_eq!(envelope.status, 500);
    assert_eq!(
        envelope.message,
        "The user associated with customer is not present or is deleted"
    );

    let all = fx
        .services
        .customers()
        .list_customers(PageRequest::default())
        .await;
    assert_eq!(all.message, "No Records Found");
}

#[tokio::test]
async fn test_bulk_delete_works_after_user_is_gone() {
    let fx = fixture();
    let user_id = registered(&fx).await;
    let customers = fx.services.customers();
    customers.add_customer(&user_id, ada()).await;
    customers.add_customer(&user_id, ada()).await;

    fx.services.users().delete_user(&user_id).await;

    let removed = customers.delete_customers_by_user(&user_id).await;
    assert_eq!(removed.status, 200);
    assert_eq!(removed.data.unwrap().deleted_count, 2);
}
