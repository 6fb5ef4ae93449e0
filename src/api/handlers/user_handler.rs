//! User handlers.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};

use crate::api::extractors::EnvelopeJson;
use crate::api::openapi::EnvelopeSchema;
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateOutcome, UpdateUser, UserResponse};
use crate::types::{Envelope, Page, PageQuery};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(add_user))
        .route(
            "/users/:user_id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("recordPerPage" = Option<String>, Query, description = "Page size, defaults to 10"),
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "Page of users", body = EnvelopeSchema),
        (status = 500, description = "Store failure or no records", body = EnvelopeSchema)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Envelope<Page<UserResponse>> {
    state.user_service.list_users(query.resolve()).await
}

/// Get a user by `user_id`
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = EnvelopeSchema),
        (status = 500, description = "User missing or store failure", body = EnvelopeSchema)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Envelope<UserResponse> {
    state.user_service.get_user(&user_id).await
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User added, data is the new user_id", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or validation error", body = EnvelopeSchema),
        (status = 500, description = "Duplicate e-mail/phone or store failure", body = EnvelopeSchema)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    EnvelopeJson(payload): EnvelopeJson<CreateUser>,
) -> Envelope<String> {
    state.user_service.add_user(payload).await
}

/// Update a user's name fields
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = EnvelopeSchema),
        (status = 400, description = "Malformed body", body = EnvelopeSchema),
        (status = 404, description = "Nothing was modified", body = EnvelopeSchema)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    EnvelopeJson(payload): EnvelopeJson<UpdateUser>,
) -> Envelope<UpdateOutcome> {
    state.user_service.update_user(&user_id, payload).await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = EnvelopeSchema),
        (status = 404, description = "No such user", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Envelope<String> {
    state.user_service.delete_user(&user_id).await
}
