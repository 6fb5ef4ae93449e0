//! Customer domain entity and related types.

use bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::update::PartialUpdate;

/// Customer document as stored in the `customer` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub customer_id: String,
    /// Owning user; checked for existence by the service, not the store
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer owned by `user_id`.
    pub fn new(user_id: String, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            customer_id: Uuid::new_v4().to_string(),
            user_id,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Customer creation request.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(
        required(message = "first_name is required"),
        length(min = 2, max = 100, message = "first_name must be 2-100 characters")
    )]
    #[schema(example = "Ada")]
    pub first_name: Option<String>,

    #[validate(
        required(message = "last_name is required"),
        length(min = 2, max = 100, message = "last_name must be 2-100 characters")
    )]
    #[schema(example = "Byron")]
    pub last_name: Option<String>,

    /// Ignored: the owner always comes from the request path.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Customer update request; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateCustomer {
    pub fn into_update(self) -> PartialUpdate {
        PartialUpdate::touch()
            .set_if_present("first_name", self.first_name)
            .set_if_present("last_name", self.last_name)
    }
}

/// Customer response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub customer_id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            user_id: customer.user_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// Identifiers of a freshly created customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CustomerCreated {
    pub user_id: String,
    pub customer_id: String,
}

/// Result of removing every customer of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CustomersDeleted {
    pub user_id: String,
    pub deleted_count: u64,
}
