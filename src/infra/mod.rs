//! Infrastructure layer - External systems integration
//!
//! - MongoDB client handle
//! - Per-operation deadlines for store calls
//! - Repositories for the `user` and `customer` collections

pub mod context;
pub mod db;
pub mod repositories;

pub use context::OpContext;
pub use db::Database;
pub use repositories::{CustomerRepository, CustomerStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCustomerRepository, MockUserRepository};
