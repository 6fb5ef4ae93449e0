//! HTTP request handlers.

pub mod customer_handler;
pub mod user_handler;

pub use customer_handler::customer_routes;
pub use user_handler::user_routes;
