//! Application services layer - Use cases and business logic.
//!
//! Services validate input, enforce existence and uniqueness rules, and fold
//! every outcome into a response envelope. They depend on repository traits,
//! never on the driver.

pub mod container;
mod customer_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use customer_service::{CustomerManager, CustomerService};
pub use user_service::{UserManager, UserService};
