//! Centralized error handling.
//!
//! Two layers of errors:
//! - [`StoreError`] is what repositories report (driver failures, missing
//!   documents, expired deadlines).
//! - [`AppError`] is the business-layer taxonomy. Every variant maps to exactly
//!   one response envelope (status, message, error detail).
//!
//! [`CommandError`] is what the CLI commands report.

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::{
    MSG_BINDING, MSG_DUPLICATE_USER, MSG_NO_RECORDS, MSG_PARENT_MISSING, MSG_VALIDATION,
    NOT_AVAILABLE,
};

/// Repository-level failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no documents in result")]
    NoDocuments,

    #[error("unsupported key: {0}")]
    UnsupportedKey(String),

    #[error("context deadline exceeded")]
    Timeout,

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error(transparent)]
    Decode(#[from] bson::de::Error),
}

/// Repository result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Business-layer error taxonomy.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed required field
    #[error("validation failed: {0}")]
    Validation(String),

    /// Request body could not be decoded
    #[error("malformed request body: {0}")]
    Binding(String),

    /// Zero matched/modified/deleted documents
    #[error("{0}")]
    NotFound(&'static str),

    /// Listing produced an empty page
    #[error("no records found")]
    NoRecords,

    /// Existence probe for the owning user failed
    #[error("parent user missing: {0}")]
    ParentMissing(#[source] StoreError),

    /// Duplicate e-mail or phone
    #[error("duplicate e-mail or phone")]
    Conflict,

    /// Any persistence failure, tagged with the operation that hit it
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// HTTP status carried by the envelope.
    ///
    /// Only validation (400) and zero-document writes (404) get their own
    /// codes; everything else is reported as 500.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Binding(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoRecords
            | AppError::ParentMissing(_)
            | AppError::Conflict
            | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope `message`
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => MSG_VALIDATION,
            AppError::Binding(_) => MSG_BINDING,
            AppError::NotFound(message) => *message,
            AppError::NoRecords => MSG_NO_RECORDS,
            AppError::ParentMissing(_) => MSG_PARENT_MISSING,
            AppError::Conflict => MSG_DUPLICATE_USER,
            AppError::Store { context, .. } => *context,
        }
    }

    /// Envelope `error`: the underlying failure text, or "NA".
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation(detail) | AppError::Binding(detail) => detail.clone(),
            AppError::ParentMissing(source) | AppError::Store { source, .. } => source.to_string(),
            AppError::NotFound(_) | AppError::NoRecords | AppError::Conflict => {
                NOT_AVAILABLE.to_string()
            }
        }
    }

    /// Adapter for `map_err`: tag a store failure with the operation context.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Store { context, source }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(format_validation_errors(&errors))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Failure of a CLI command before or while serving.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Command result type alias
pub type CommandResult<T> = Result<T, CommandError>;

/// Format validation errors into a user-friendly string, ordered by field name.
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
