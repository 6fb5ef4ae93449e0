//! Customer handlers, nested under their owning user.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};

use crate::api::extractors::EnvelopeJson;
use crate::api::openapi::EnvelopeSchema;
use crate::api::AppState;
use crate::domain::{
    CreateCustomer, CustomerCreated, CustomerResponse, CustomersDeleted, UpdateCustomer,
    UpdateOutcome,
};
use crate::types::{Envelope, Page, PageQuery};

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers))
        .route(
            "/users/:user_id/customers",
            get(list_customers_by_user)
                .post(add_customer)
                .delete(delete_customers_by_user),
        )
        .route(
            "/users/:user_id/customers/:customer_id",
            get(get_customer)
                .patch(update_customer)
                .delete(delete_customer),
        )
}

/// List customers across all users
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    params(
        ("recordPerPage" = Option<String>, Query, description = "Page size, defaults to 10"),
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "Page of customers", body = EnvelopeSchema),
        (status = 500, description = "Store failure or no records", body = EnvelopeSchema)
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Envelope<Page<CustomerResponse>> {
    state.customer_service.list_customers(query.resolve()).await
}

/// List the customers of one user
#[utoipa::path(
    get,
    path = "/users/{user_id}/customers",
    tag = "Customers",
    params(
        ("user_id" = String, Path, description = "Owning user"),
        ("recordPerPage" = Option<String>, Query, description = "Page size, defaults to 10"),
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "Page of customers", body = EnvelopeSchema),
        (status = 500, description = "Unknown user, store failure or no records", body = EnvelopeSchema)
    )
)]
pub async fn list_customers_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Envelope<Page<CustomerResponse>> {
    state
        .customer_service
        .list_customers_by_user(&user_id, query.resolve())
        .await
}

/// Get one customer
#[utoipa::path(
    get,
    path = "/users/{user_id}/customers/{customer_id}",
    tag = "Customers",
    params(
        ("user_id" = String, Path, description = "Owning user"),
        ("customer_id" = String, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Customer found", body = EnvelopeSchema),
        (status = 500, description = "Unknown user, missing customer or store failure", body = EnvelopeSchema)
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path((user_id, customer_id)): Path<(String, String)>,
) -> Envelope<CustomerResponse> {
    state
        .customer_service
        .get_customer(&user_id, &customer_id)
        .await
}

/// Add a customer to a user
#[utoipa::path(
    post,
    path = "/users/{user_id}/customers",
    tag = "Customers",
    params(("user_id" = String, Path, description = "Owning user")),
    request_body = CreateCustomer,
    responses(
        (status = 200, description = "Customer added", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or validation error", body = EnvelopeSchema),
        (status = 500, description = "Unknown user or store failure", body = EnvelopeSchema)
    )
)]
pub async fn add_customer(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    EnvelopeJson(payload): EnvelopeJson<CreateCustomer>,
) -> Envelope<CustomerCreated> {
    state.customer_service.add_customer(&user_id, payload).await
}

/// Update a customer's name fields
#[utoipa::path(
    patch,
    path = "/users/{user_id}/customers/{customer_id}",
    tag = "Customers",
    params(
        ("user_id" = String, Path, description = "Owning user"),
        ("customer_id" = String, Path, description = "Customer identifier")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = EnvelopeSchema),
        (status = 404, description = "Nothing was modified", body = EnvelopeSchema),
        (status = 500, description = "Unknown user", body = EnvelopeSchema)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path((user_id, customer_id)): Path<(String, String)>,
    EnvelopeJson(payload): EnvelopeJson<UpdateCustomer>,
) -> Envelope<UpdateOutcome> {
    state
        .customer_service
        .update_customer(&user_id, &customer_id, payload)
        .await
}

/// Delete one customer
#[utoipa::path(
    delete,
    path = "/users/{user_id}/customers/{customer_id}",
    tag = "Customers",
    params(
        ("user_id" = String, Path, description = "Owning user, not checked"),
        ("customer_id" = String, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Customer deleted", body = EnvelopeSchema),
        (status = 404, description = "No such customer", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path((_user_id, customer_id)): Path<(String, String)>,
) -> Envelope<String> {
    state.customer_service.delete_customer(&customer_id).await
}

/// Delete every customer of a user
#[utoipa::path(
    delete,
    path = "/users/{user_id}/customers",
    tag = "Customers",
    params(("user_id" = String, Path, description = "Owning user, not checked")),
    responses(
        (status = 200, description = "Customers deleted", body = EnvelopeSchema),
        (status = 404, description = "User has no customers", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    )
)]
pub async fn delete_customers_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Envelope<CustomersDeleted> {
    state
        .customer_service
        .delete_customers_by_user(&user_id)
        .await
}
