//! User repository implementation on the `user` collection.

use async_trait::async_trait;
use bson::{doc, Document};

use super::base::DocumentCollection;
use crate::config::USER_COLLECTION;
use crate::domain::{PartialUpdate, UpdateOutcome, User};
use crate::errors::{StoreError, StoreResult};
use crate::infra::context::OpContext;
use crate::infra::db::Database;
use crate::types::{Page, PageRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Pure persistence: no validation, no hashing, no existence rules.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// One page of all users plus the total count
    async fn find_page(&self, ctx: &OpContext, page: PageRequest) -> StoreResult<Page<User>>;

    /// Fetch by natural key; [`StoreError::NoDocuments`] on a miss
    async fn find_by_user_id(&self, ctx: &OpContext, user_id: &str) -> StoreResult<User>;

    /// Existence probe used before touching a user's customers
    async fn exists(&self, ctx: &OpContext, user_id: &str) -> StoreResult<bool>;

    /// Count users whose `key` equals `value`; only `email` and `phone`
    async fn count_by_key(&self, ctx: &OpContext, key: &str, value: &str) -> StoreResult<u64>;

    async fn insert(&self, ctx: &OpContext, user: User) -> StoreResult<()>;

    /// Partial update by `user_id`, never upserting
    async fn update(
        &self,
        ctx: &OpContext,
        user_id: &str,
        update: PartialUpdate,
    ) -> StoreResult<UpdateOutcome>;

    /// Remove one user; returns the deleted count
    async fn delete(&self, ctx: &OpContext, user_id: &str) -> StoreResult<u64>;
}

/// MongoDB implementation of UserRepository
pub struct UserStore {
    users: DocumentCollection<User>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: &Database) -> Self {
        Self {
            users: DocumentCollection::new(&db.handle(), USER_COLLECTION),
        }
    }
}

fn by_user_id(user_id: &str) -> Document {
    doc! { "user_id": user_id }
}

/// Filter for the uniqueness lookups.
fn count_filter(key: &str, value: &str) -> StoreResult<Document> {
    match key {
        "email" | "phone" => {
            let mut filter = Document::new();
            filter.insert(key, value);
            Ok(filter)
        }
        other => Err(StoreError::UnsupportedKey(other.to_string())),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_page(&self, ctx: &OpContext, page: PageRequest) -> StoreResult<Page<User>> {
        self.users.find_page(ctx, Document::new(), page).await
    }

    async fn find_by_user_id(&self, ctx: &OpContext, user_id: &str) -> StoreResult<User> {
        self.users.find_one(ctx, by_user_id(user_id)).await
    }

    async fn exists(&self, ctx: &OpContext, user_id: &str) -> StoreResult<bool> {
        self.users.exists(ctx, by_user_id(user_id)).await
    }

    async fn count_by_key(&self, ctx: &OpContext, key: &str, value: &str) -> StoreResult<u64> {
        let filter = count_filter(key, value)?;
        self.users.count(ctx, filter).await
    }

    async fn insert(&self, ctx: &OpContext, user: User) -> StoreResult<()> {
        self.users.insert(ctx, &user).await
    }

    async fn update(
        &self,
        ctx: &OpContext,
        user_id: &str,
        update: PartialUpdate,
    ) -> StoreResult<UpdateOutcome> {
        self.users
            .update_one(ctx, by_user_id(user_id), &update)
            .await
    }

    async fn delete(&self, ctx: &OpContext, user_id: &str) -> StoreResult<u64> {
        self.users.delete_one(ctx, by_user_id(user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_filter_accepts_email_and_phone() {
        assert_eq!(
            count_filter("email", "jo@example.com").unwrap(),
            doc! { "email": "jo@example.com" }
        );
        assert_eq!(
            count_filter("phone", "555-0100").unwrap(),
            doc! { "phone": "555-0100" }
        );
    }

    #[test]
    fn test_count_filter_rejects_other_keys() {
        let err = count_filter("user_id", "u-1").unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedKey(key) if key == "user_id"));
    }
}
