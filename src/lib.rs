//! Customer Registry - users and the customers they own
//!
//! A CRUD backend over MongoDB: validated, existence-checked writes,
//! password hashing, pagination and a uniform response envelope.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, request/response types, password hashing
//! - **services**: Business rules, one envelope per operation
//! - **infra**: MongoDB handle, deadlines and repositories
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check the database
//! cargo run -- ping
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Customer, Password, User};
pub use errors::{AppError, AppResult};
pub use types::Envelope;
