//! User domain entity and related types.

use bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::update::PartialUpdate;

/// User document as stored in the `user` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 PHC string, never plaintext
    pub password: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated identifiers and timestamps.
    pub fn new(
        first_name: String,
        last_name: String,
        password_hash: String,
        email: String,
        phone: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            user_id: Uuid::new_v4().to_string(),
            first_name,
            last_name,
            password: password_hash,
            email,
            phone,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User creation request.
///
/// Fields are optional at the type level so that a missing field is reported
/// by validation rather than by JSON decoding.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(
        required(message = "first_name is required"),
        length(min = 2, max = 100, message = "first_name must be 2-100 characters")
    )]
    #[schema(example = "Jo")]
    pub first_name: Option<String>,

    #[validate(
        required(message = "last_name is required"),
        length(min = 2, max = 100, message = "last_name must be 2-100 characters")
    )]
    #[schema(example = "Lin")]
    pub last_name: Option<String>,

    #[serde(alias = "Password")]
    #[validate(
        required(message = "password is required"),
        length(min = 6, message = "password must be at least 6 characters")
    )]
    #[schema(example = "secret1", min_length = 6)]
    pub password: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address")
    )]
    #[schema(example = "jo@example.com")]
    pub email: Option<String>,

    #[validate(required(message = "phone is required"))]
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
}

/// User update request; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[schema(example = "Joanna")]
    pub first_name: Option<String>,
    #[schema(example = "Lin")]
    pub last_name: Option<String>,
}

impl UpdateUser {
    pub fn into_update(self) -> PartialUpdate {
        PartialUpdate::touch()
            .set_if_present("first_name", self.first_name)
            .set_if_present("last_name", self.last_name)
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
