//! Partial updates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Fields to overwrite on an existing record.
///
/// Only fields explicitly supplied are recorded; `updated_at` is always part
/// of the update. Built field by field so the set of written keys is exactly
/// the set the caller provided.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    fields: Vec<(&'static str, String)>,
    updated_at: DateTime<Utc>,
}

impl PartialUpdate {
    pub fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            fields: Vec::new(),
            updated_at,
        }
    }

    /// Start an update stamped with the current time.
    pub fn touch() -> Self {
        Self::new(Utc::now())
    }

    /// Record `key` only when a value was supplied.
    pub fn set_if_present(mut self, key: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.fields.push((key, value));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// What the store reported for an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}
