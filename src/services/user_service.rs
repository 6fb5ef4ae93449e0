//! User service - Handles user-related business logic.
//!
//! Every operation resolves to an [`Envelope`]; failures never escape as
//! `Err`. Each call gets its own [`OpContext`] deadline.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::config::{
    MSG_EMAIL_CHECK_FAILED, MSG_PHONE_CHECK_FAILED, MSG_RECORDS_FETCHED, MSG_RECORD_FETCHED,
    MSG_USER_ADDED, MSG_USER_DELETED, MSG_USER_DELETE_FAILED, MSG_USER_FETCH_FAILED,
    MSG_USER_LIST_FAILED, MSG_USER_NOT_CREATED, MSG_USER_NOT_FOUND, MSG_USER_UPDATED,
    STORE_TIMEOUT,
};
use crate::domain::{CreateUser, Password, UpdateOutcome, UpdateUser, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::{OpContext, UserRepository};
use crate::types::{Envelope, Page, PageRequest};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// One page of users; an empty page is reported as "No Records Found"
    async fn list_users(&self, page: PageRequest) -> Envelope<Page<UserResponse>>;

    async fn get_user(&self, user_id: &str) -> Envelope<UserResponse>;

    /// Validate, reject duplicates, hash and insert; `data` is the new `user_id`
    async fn add_user(&self, request: CreateUser) -> Envelope<String>;

    /// Overwrite the supplied name fields only
    async fn update_user(&self, user_id: &str, request: UpdateUser) -> Envelope<UpdateOutcome>;

    /// `data` is the deleted `user_id`
    async fn delete_user(&self, user_id: &str) -> Envelope<String>;
}

/// Concrete implementation of UserService over a [`UserRepository`].
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    timeout: Duration,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self::with_timeout(users, STORE_TIMEOUT)
    }

    pub fn with_timeout(users: Arc<dyn UserRepository>, timeout: Duration) -> Self {
        Self { users, timeout }
    }

    fn context(&self) -> OpContext {
        OpContext::with_timeout(self.timeout)
    }

    async fn try_list(&self, page: PageRequest) -> AppResult<Page<UserResponse>> {
        let ctx = self.context();
        let found = self
            .users
            .find_page(&ctx, page)
            .await
            .map_err(AppError::store(MSG_USER_LIST_FAILED))?;

        if found.is_empty() {
            return Err(AppError::NoRecords);
        }
        Ok(found.map(UserResponse::from))
    }

    async fn try_get(&self, user_id: &str) -> AppResult<UserResponse> {
        let ctx = self.context();
        self.users
            .find_by_user_id(&ctx, user_id)
            .await
            .map(UserResponse::from)
            .map_err(AppError::store(MSG_USER_FETCH_FAILED))
    }

    async fn try_add(&self, request: CreateUser) -> AppResult<String> {
        request.validate()?;
        let CreateUser {
            first_name: Some(first_name),
            last_name: Some(last_name),
            password: Some(password),
            email: Some(email),
            phone: Some(phone),
        } = request
        else {
            return Err(AppError::Validation("missing required field".to_string()));
        };

        let ctx = self.context();
        let email_count = self
            .users
            .count_by_key(&ctx, "email", &email)
            .await
            .map_err(AppError::store(MSG_EMAIL_CHECK_FAILED))?;

        let password = Password::hash(&password);

        let phone_count = self
            .users
            .count_by_key(&ctx, "phone", &phone)
            .await
            .map_err(AppError::store(MSG_PHONE_CHECK_FAILED))?;

        if email_count > 0 || phone_count > 0 {
            tracing::info!(email_count, phone_count, "duplicate user rejected");
            return Err(AppError::Conflict);
        }

        let user = User::new(first_name, last_name, password.into_string(), email, phone);
        let user_id = user.user_id.clone();

        self.users
            .insert(&ctx, user)
            .await
            .map_err(AppError::store(MSG_USER_NOT_CREATED))?;

        tracing::info!(%user_id, "user created");
        Ok(user_id)
    }

    async fn try_update(&self, user_id: &str, request: UpdateUser) -> AppResult<UpdateOutcome> {
        let ctx = self.context();
        // Zero modified documents wins over a store error.
        match self.users.update(&ctx, user_id, request.into_update()).await {
            Ok(outcome) if outcome.modified_count > 0 => Ok(outcome),
            Ok(_) => Err(AppError::NotFound(MSG_USER_NOT_FOUND)),
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "user update failed");
                Err(AppError::NotFound(MSG_USER_NOT_FOUND))
            }
        }
    }

    async fn try_delete(&self, user_id: &str) -> AppResult<String> {
        let ctx = self.context();
        let deleted = self
            .users
            .delete(&ctx, user_id)
            .await
            .map_err(AppError::store(MSG_USER_DELETE_FAILED))?;

        if deleted == 0 {
            return Err(AppError::NotFound(MSG_USER_NOT_FOUND));
        }
        tracing::info!(%user_id, "user deleted");
        Ok(user_id.to_string())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self, page: PageRequest) -> Envelope<Page<UserResponse>> {
        Envelope::respond(self.try_list(page).await, MSG_RECORDS_FETCHED)
    }

    async fn get_user(&self, user_id: &str) -> Envelope<UserResponse> {
        Envelope::respond(self.try_get(user_id).await, MSG_RECORD_FETCHED)
    }

    async fn add_user(&self, request: CreateUser) -> Envelope<String> {
        Envelope::respond(self.try_add(request).await, MSG_USER_ADDED)
    }

    async fn update_user(&self, user_id: &str, request: UpdateUser) -> Envelope<UpdateOutcome> {
        Envelope::respond(self.try_update(user_id, request).await, MSG_USER_UPDATED)
    }

    async fn delete_user(&self, user_id: &str) -> Envelope<String> {
        Envelope::respond(self.try_delete(user_id).await, MSG_USER_DELETED)
    }
}
