//! Service Container - Centralized service access.
//!
//! Services are built once at startup and shared behind `Arc<dyn Trait>`;
//! they hold no mutable state, so no locking is involved.

use std::sync::Arc;

use super::{CustomerManager, CustomerService, UserManager, UserService};
use crate::infra::{CustomerRepository, CustomerStore, Database, UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn users(&self) -> Arc<dyn UserService>;

    fn customers(&self) -> Arc<dyn CustomerService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    customer_service: Arc<dyn CustomerService>,
}

impl Services {
    pub fn new(
        user_service: Arc<dyn UserService>,
        customer_service: Arc<dyn CustomerService>,
    ) -> Self {
        Self {
            user_service,
            customer_service,
        }
    }

    /// Wire the services over the given repositories.
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self::new(
            Arc::new(UserManager::new(users.clone())),
            Arc::new(CustomerManager::new(customers, users)),
        )
    }

    /// Wire the MongoDB-backed repositories and services.
    pub fn from_database(database: &Database) -> Self {
        Self::from_repositories(
            Arc::new(UserStore::new(database)),
            Arc::new(CustomerStore::new(database)),
        )
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn customers(&self) -> Arc<dyn CustomerService> {
        self.customer_service.clone()
    }
}
