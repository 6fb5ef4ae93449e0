//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::handlers::{customer_handler, user_handler};
use crate::domain::{
    CreateCustomer, CreateUser, CustomerCreated, CustomerResponse, CustomersDeleted,
    UpdateCustomer, UpdateOutcome, UpdateUser, UserResponse,
};

/// Shape of every response body. `data` depends on the operation.
#[derive(Serialize, ToSchema)]
pub struct EnvelopeSchema {
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Records Fetched Successfully")]
    pub message: String,
    /// Underlying failure text, or "NA"
    #[schema(example = "NA")]
    pub error: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

/// OpenAPI documentation for the customer registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer Registry",
        version = "0.1.0",
        description = "Users and the customers they own, backed by MongoDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::add_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Customer endpoints
        customer_handler::list_customers,
        customer_handler::list_customers_by_user,
        customer_handler::get_customer,
        customer_handler::add_customer,
        customer_handler::update_customer,
        customer_handler::delete_customer,
        customer_handler::delete_customers_by_user,
    ),
    components(
        schemas(
            EnvelopeSchema,
            UserResponse,
            CreateUser,
            UpdateUser,
            CustomerResponse,
            CreateCustomer,
            UpdateCustomer,
            CustomerCreated,
            CustomersDeleted,
            UpdateOutcome,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Customers", description = "Customers owned by a user")
    )
)]
pub struct ApiDoc;
