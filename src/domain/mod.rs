//! Domain layer - Core business entities and logic
//!
//! Users, their customers, the password value object and the partial-update
//! builder shared by both resources.

pub mod customer;
pub mod password;
pub mod update;
pub mod user;

pub use customer::{
    CreateCustomer, Customer, CustomerCreated, CustomerResponse, CustomersDeleted, UpdateCustomer,
};
pub use password::{Password, PasswordMismatch};
pub use update::{PartialUpdate, UpdateOutcome};
pub use user::{CreateUser, UpdateUser, User, UserResponse};
