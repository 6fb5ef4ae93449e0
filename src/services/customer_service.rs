//! Customer service - customers owned by a user.
//!
//! Operations scoped to a parent user probe [`UserRepository::exists`] first
//! and stop with a parent-missing envelope before the customer store is
//! touched. The single and bulk deletes skip the probe.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::config::{
    MSG_CUSTOMER_ADDED, MSG_CUSTOMER_DELETED, MSG_CUSTOMER_DELETE_FAILED,
    MSG_CUSTOMER_FETCH_FAILED, MSG_CUSTOMER_LIST_FAILED, MSG_CUSTOMER_NOT_CREATED,
    MSG_CUSTOMER_NOT_FOUND, MSG_CUSTOMER_UPDATED, MSG_RECORDS_FETCHED, MSG_RECORD_FETCHED,
    STORE_TIMEOUT,
};
use crate::domain::{
    CreateCustomer, Customer, CustomerCreated, CustomerResponse, CustomersDeleted, UpdateCustomer,
    UpdateOutcome,
};
use crate::errors::{AppError, AppResult, StoreError};
use crate::infra::{CustomerRepository, OpContext, UserRepository};
use crate::types::{Envelope, Page, PageRequest};

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// One page across all users
    async fn list_customers(&self, page: PageRequest) -> Envelope<Page<CustomerResponse>>;

    async fn list_customers_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Envelope<Page<CustomerResponse>>;

    async fn get_customer(&self, user_id: &str, customer_id: &str)
        -> Envelope<CustomerResponse>;

    /// The owner is always `user_id`, whatever the body says
    async fn add_customer(
        &self,
        user_id: &str,
        request: CreateCustomer,
    ) -> Envelope<CustomerCreated>;

    async fn update_customer(
        &self,
        user_id: &str,
        customer_id: &str,
        request: UpdateCustomer,
    ) -> Envelope<UpdateOutcome>;

    /// `data` is the deleted `customer_id`
    async fn delete_customer(&self, customer_id: &str) -> Envelope<String>;

    /// Remove every customer of `user_id`, even if the user is gone
    async fn delete_customers_by_user(&self, user_id: &str) -> Envelope<CustomersDeleted>;
}

/// Concrete implementation of CustomerService.
pub struct CustomerManager {
    customers: Arc<dyn CustomerRepository>,
    users: Arc<dyn UserRepository>,
    timeout: Duration,
}

impl CustomerManager {
    pub fn new(customers: Arc<dyn CustomerRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self::with_timeout(customers, users, STORE_TIMEOUT)
    }

    pub fn with_timeout(
        customers: Arc<dyn CustomerRepository>,
        users: Arc<dyn UserRepository>,
        timeout: Duration,
    ) -> Self {
        Self {
            customers,
            users,
            timeout,
        }
    }

    fn context(&self) -> OpContext {
        OpContext::with_timeout(self.timeout)
    }

    /// Existence probe for the owning user.
    async fn ensure_parent(&self, ctx: &OpContext, user_id: &str) -> AppResult<()> {
        match self.users.exists(ctx, user_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(AppError::ParentMissing(StoreError::NoDocuments)),
            Err(err) => Err(AppError::ParentMissing(err)),
        }
    }

    fn non_empty(found: Page<Customer>) -> AppResult<Page<CustomerResponse>> {
        if found.is_empty() {
            return Err(AppError::NoRecords);
        }
        Ok(found.map(CustomerResponse::from))
    }

    async fn try_list(&self, page: PageRequest) -> AppResult<Page<CustomerResponse>> {
        let ctx = self.context();
        let found = self
            .customers
            .find_page(&ctx, page)
            .await
            .map_err(AppError::store(MSG_CUSTOMER_LIST_FAILED))?;
        Self::non_empty(found)
    }

    async fn try_list_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> AppResult<Page<CustomerResponse>> {
        let ctx = self.context();
        self.ensure_parent(&ctx, user_id).await?;

        let found = self
            .customers
            .find_page_by_user_id(&ctx, user_id, page)
            .await
            .map_err(AppError::store(MSG_CUSTOMER_LIST_FAILED))?;
        Self::non_empty(found)
    }

    async fn try_get(&self, user_id: &str, customer_id: &str) -> AppResult<CustomerResponse> {
        let ctx = self.context();
        self.ensure_parent(&ctx, user_id).await?;

        self.customers
            .find_by_customer_id(&ctx, customer_id)
            .await
            .map(CustomerResponse::from)
            .map_err(AppError::store(MSG_CUSTOMER_FETCH_FAILED))
    }

    async fn try_add(&self, user_id: &str, request: CreateCustomer) -> AppResult<CustomerCreated> {
        let ctx = self.context();
        self.ensure_parent(&ctx, user_id).await?;

        request.validate()?;
        let CreateCustomer {
            first_name: Some(first_name),
            last_name: Some(last_name),
            ..
        } = request
        else {
            return Err(AppError::Validation("missing required field".to_string()));
        };

        let customer = Customer::new(user_id.to_string(), first_name, last_name);
        let created = CustomerCreated {
            user_id: customer.user_id.clone(),
            customer_id: customer.customer_id.clone(),
        };

        self.customers
            .insert(&ctx, customer)
            .await
            .map_err(AppError::store(MSG_CUSTOMER_NOT_CREATED))?;

        tracing::info!(user_id = %created.user_id, customer_id = %created.customer_id, "customer created");
        Ok(created)
    }

    async fn try_update(
        &self,
        user_id: &str,
        customer_id: &str,
        request: UpdateCustomer,
    ) -> AppResult<UpdateOutcome> {
        let ctx = self.context();
        self.ensure_parent(&ctx, user_id).await?;

        // Zero modified documents wins over a store error.
        match self
            .customers
            .update(&ctx, customer_id, request.into_update())
            .await
        {
            Ok(outcome) if outcome.modified_count > 0 => Ok(outcome),
            Ok(_) => Err(AppError::NotFound(MSG_CUSTOMER_NOT_FOUND)),
            Err(err) => {
                tracing::warn!(%customer_id, error = %err, "customer update failed");
                Err(AppError::NotFound(MSG_CUSTOMER_NOT_FOUND))
            }
        }
    }

    async fn try_delete(&self, customer_id: &str) -> AppResult<String> {
        let ctx = self.context();
        let deleted = self
            .customers
            .delete(&ctx, customer_id)
            .await
            .map_err(AppError::store(MSG_CUSTOMER_DELETE_FAILED))?;

        if deleted == 0 {
            return Err(AppError::NotFound(MSG_CUSTOMER_NOT_FOUND));
        }
        tracing::info!(%customer_id, "customer deleted");
        Ok(customer_id.to_string())
    }

    async fn try_delete_by_user(&self, user_id: &str) -> AppResult<CustomersDeleted> {
        let ctx = self.context();
        let deleted_count = self
            .customers
            .delete_by_user_id(&ctx, user_id)
            .await
            .map_err(AppError::store(MSG_CUSTOMER_DELETE_FAILED))?;

        if deleted_count == 0 {
            return Err(AppError::NotFound(MSG_CUSTOMER_NOT_FOUND));
        }
        tracing::info!(%user_id, deleted_count, "customers deleted");
        Ok(CustomersDeleted {
            user_id: user_id.to_string(),
            deleted_count,
        })
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn list_customers(&self, page: PageRequest) -> Envelope<Page<CustomerResponse>> {
        Envelope::respond(self.try_list(page).await, MSG_RECORDS_FETCHED)
    }

    async fn list_customers_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Envelope<Page<CustomerResponse>> {
        Envelope::respond(self.try_list_by_user(user_id, page).await, MSG_RECORDS_FETCHED)
    }

    async fn get_customer(
        &self,
        user_id: &str,
        customer_id: &str,
    ) -> Envelope<CustomerResponse> {
        Envelope::respond(self.try_get(user_id, customer_id).await, MSG_RECORD_FETCHED)
    }

    async fn add_customer(
        &self,
        user_id: &str,
        request: CreateCustomer,
    ) -> Envelope<CustomerCreated> {
        Envelope::respond(self.try_add(user_id, request).await, MSG_CUSTOMER_ADDED)
    }

    async fn update_customer(
        &self,
        user_id: &str,
        customer_id: &str,
        request: UpdateCustomer,
    ) -> Envelope<UpdateOutcome> {
        Envelope::respond(
            self.try_update(user_id, customer_id, request).await,
            MSG_CUSTOMER_UPDATED,
        )
    }

    async fn delete_customer(&self, customer_id: &str) -> Envelope<String> {
        Envelope::respond(self.try_delete(customer_id).await, MSG_CUSTOMER_DELETED)
    }

    async fn delete_customers_by_user(&self, user_id: &str) -> Envelope<CustomersDeleted> {
        Envelope::respond(self.try_delete_by_user(user_id).await, MSG_CUSTOMER_DELETED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCustomerRepository, MockUserRepository};
    use std::sync::Mutex;

    fn user_exists(present: bool) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_exists()
            .times(1)
            .returning(move |_, _| Ok(present));
        users
    }

    fn service(customers: MockCustomerRepository, users: MockUserRepository) -> CustomerManager {
        CustomerManager::new(Arc::new(customers), Arc::new(users))
    }

    fn create_request() -> CreateCustomer {
        CreateCustomer {
            first_name: Some("Ada".into()),
            last_name: Some("Byron".into()),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_add_under_missing_user_never_touches_customers() {
        // No expectations: any customer-store call panics.
        let customers = MockCustomerRepository::new();

        let envelope = service(customers, user_exists(false))
            .add_customer("ghost", create_request())
            .await;

        assert_eq!(envelope.status, 500);
        assert_eq!(
            envelope.message,
            "The user associated with customer is not present or is deleted"
        );
        assert_eq!(envelope.error, "no documents in result");
    }

    #[tokio::test]
    async fn test_probe_failure_carries_store_error() {
        let mut users = MockUserRepository::new();
        users
            .expect_exists()
            .returning(|_, _| Err(StoreError::Timeout));

        let envelope = service(MockCustomerRepository::new(), users)
            .get_customer("u-1", "c-1")
            .await;

        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.error, "context deadline exceeded");
    }

    #[tokio::test]
    async fn test_add_stamps_owner_from_path() {
        let stored: Arc<Mutex<Option<Customer>>> = Arc::default();
        let sink = stored.clone();

        let mut customers = MockCustomerRepository::new();
        customers.expect_insert().times(1).returning(move |_, customer| {
            *sink.lock().unwrap() = Some(customer);
            Ok(())
        });

        let request = CreateCustomer {
            user_id: Some("someone-else".into()),
            ..create_request()
        };
        let envelope = service(customers, user_exists(true))
            .add_customer("u-1", request)
            .await;

        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.message, "Customer Added Successfully");
        let created = envelope.data.unwrap();
        assert_eq!(created.user_id, "u-1");

        let customer = stored.lock().unwrap().take().unwrap();
        assert_eq!(customer.user_id, "u-1");
        assert_eq!(customer.customer_id, created.customer_id);
    }

    #[tokio::test]
    async fn test_add_validates_after_probe() {
        let request = CreateCustomer {
            first_name: Some("A".into()),
            ..create_request()
        };

        let envelope = service(MockCustomerRepository::new(), user_exists(true))
            .add_customer("u-1", request)
            .await;

        assert_eq!(envelope.status, 400);
        assert!(envelope.error.contains("first_name"));
    }

    #[tokio::test]
    async fn test_list_by_user_filters_on_owner() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_page_by_user_id()
            .withf(|_, user_id, page| user_id == "u-1" && page.offset == 5)
            .returning(|_, user_id, _| {
                Ok(Page {
                    total_count: 6,
                    items: vec![Customer::new(user_id.to_string(), "Ada".into(), "Byron".into())],
                })
            });

        let page = crate::types::paginate(Some("2"), Some("5"));
        let envelope = service(customers, user_exists(true))
            .list_customers_by_user("u-1", page)
            .await;

        assert_eq!(envelope.status, 200);
        let data = envelope.data.unwrap();
        assert_eq!(data.total_count, 6);
        assert_eq!(data.items[0].user_id, "u-1");
    }

    #[tokio::test]
    async fn test_list_all_without_records() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_page()
            .returning(|_, _| Ok(Page::empty()));

        let envelope = service(customers, MockUserRepository::new())
            .list_customers(PageRequest::default())
            .await;

        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.message, "No Records Found");
    }

    #[tokio::test]
    async fn test_update_without_modification_is_not_found() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_update()
            .withf(|_, id, update| id == "c-1" && update.get("first_name") == Some("Eve"))
            .returning(|_, _, _| {
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: 0,
                })
            });

        let request = UpdateCustomer {
            first_name: Some("Eve".into()),
            last_name: None,
        };
        let envelope = service(customers, user_exists(true))
            .update_customer("u-1", "c-1", request)
            .await;

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.message, "Customer not found or is already deleted");
    }

    #[tokio::test]
    async fn test_delete_skips_probe() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_delete().returning(|_, _| Ok(1));

        let envelope = service(customers, MockUserRepository::new())
            .delete_customer("c-1")
            .await;

        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data.as_deref(), Some("c-1"));
    }

    #[tokio::test]
    async fn test_bulk_delete_reports_count() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_delete_by_user_id()
            .withf(|_, user_id| user_id == "u-1")
            .returning(|_, _| Ok(3));

        let envelope = service(customers, MockUserRepository::new())
            .delete_customers_by_user("u-1")
            .await;

        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data.unwrap().deleted_count, 3);
    }

    #[tokio::test]
    async fn test_bulk_delete_with_nothing_to_remove() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_delete_by_user_id()
            .returning(|_, _| Ok(0));

        let envelope = service(customers, MockUserRepository::new())
            .delete_customers_by_user("u-1")
            .await;

        assert_eq!(envelope.status, 404);
    }
}
