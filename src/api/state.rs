//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{CustomerService, ServiceContainer, Services, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Customer service
    pub customer_service: Arc<dyn CustomerService>,
    /// MongoDB handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the MongoDB-backed services once and share them.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_database(&database);
        Self::from_container(&container, database)
    }

    /// Take the services out of an existing container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self::new(container.users(), container.customers(), database)
    }

    /// Create application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        customer_service: Arc<dyn CustomerService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            customer_service,
            database,
        }
    }
}
