//! Customer repository implementation on the `customer` collection.

use async_trait::async_trait;
use bson::{doc, Document};

use super::base::DocumentCollection;
use crate::config::CUSTOMER_COLLECTION;
use crate::domain::{Customer, PartialUpdate, UpdateOutcome};
use crate::errors::StoreResult;
use crate::infra::context::OpContext;
use crate::infra::db::Database;
use crate::types::{Page, PageRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// The owning user is never checked here; callers probe
/// [`UserRepository::exists`](super::UserRepository::exists) first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// One page of all customers
    async fn find_page(&self, ctx: &OpContext, page: PageRequest) -> StoreResult<Page<Customer>>;

    /// One page of the customers owned by `user_id`
    async fn find_page_by_user_id(
        &self,
        ctx: &OpContext,
        user_id: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Customer>>;

    async fn find_by_customer_id(&self, ctx: &OpContext, customer_id: &str)
        -> StoreResult<Customer>;

    async fn insert(&self, ctx: &OpContext, customer: Customer) -> StoreResult<()>;

    async fn update(
        &self,
        ctx: &OpContext,
        customer_id: &str,
        update: PartialUpdate,
    ) -> StoreResult<UpdateOutcome>;

    async fn delete(&self, ctx: &OpContext, customer_id: &str) -> StoreResult<u64>;

    /// Remove every customer of `user_id`; returns the deleted count
    async fn delete_by_user_id(&self, ctx: &OpContext, user_id: &str) -> StoreResult<u64>;
}

/// MongoDB implementation of CustomerRepository
pub struct CustomerStore {
    customers: DocumentCollection<Customer>,
}

impl CustomerStore {
    pub fn new(db: &Database) -> Self {
        Self {
            customers: DocumentCollection::new(&db.handle(), CUSTOMER_COLLECTION),
        }
    }
}

fn by_customer_id(customer_id: &str) -> Document {
    doc! { "customer_id": customer_id }
}

fn by_user_id(user_id: &str) -> Document {
    doc! { "user_id": user_id }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn find_page(&self, ctx: &OpContext, page: PageRequest) -> StoreResult<Page<Customer>> {
        self.customers.find_page(ctx, Document::new(), page).await
    }

    async fn find_page_by_user_id(
        &self,
        ctx: &OpContext,
        user_id: &str,
        page: PageRequest,
    ) -> StoreResult<Page<Customer>> {
        self.customers
            .find_page(ctx, by_user_id(user_id), page)
            .await
    }

    async fn find_by_customer_id(
        &self,
        ctx: &OpContext,
        customer_id: &str,
    ) -> StoreResult<Customer> {
        self.customers
            .find_one(ctx, by_customer_id(customer_id))
            .await
    }

    async fn insert(&self, ctx: &OpContext, customer: Customer) -> StoreResult<()> {
        self.customers.insert(ctx, &customer).await
    }

    async fn update(
        &self,
        ctx: &OpContext,
        customer_id: &str,
        update: PartialUpdate,
    ) -> StoreResult<UpdateOutcome> {
        self.customers
            .update_one(ctx, by_customer_id(customer_id), &update)
            .await
    }

    async fn delete(&self, ctx: &OpContext, customer_id: &str) -> StoreResult<u64> {
        self.customers
            .delete_one(ctx, by_customer_id(customer_id))
            .await
    }

    async fn delete_by_user_id(&self, ctx: &OpContext, user_id: &str) -> StoreResult<u64> {
        self.customers.delete_many(ctx, by_user_id(user_id)).await
    }
}
