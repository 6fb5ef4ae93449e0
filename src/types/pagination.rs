//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Raw `?recordPerPage=&page=` query parameters, kept as text so that
/// non-numeric values fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<String>,
    pub page: Option<String>,
}

impl PageQuery {
    pub fn resolve(&self) -> PageRequest {
        paginate(self.page.as_deref(), self.record_per_page.as_deref())
    }
}

/// Resolved page window handed to services and repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub page: u64,
    pub offset: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        paginate(None, None)
    }
}

/// Convert page/size parameters into a limit/offset window.
///
/// Missing, non-numeric or non-positive values fall back to the defaults
/// (10 items, page 1). `limit` has no upper bound.
pub fn paginate(page_param: Option<&str>, size_param: Option<&str>) -> PageRequest {
    let limit = positive_or(size_param, DEFAULT_PAGE_SIZE);
    let page = positive_or(page_param, DEFAULT_PAGE_NUMBER);

    PageRequest {
        limit,
        page,
        offset: (page - 1).saturating_mul(limit),
    }
}

fn positive_or(param: Option<&str>, default: u64) -> u64 {
    param
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|value| *value >= 1)
        .map_or(default, |value| value as u64)
}

/// One page of results plus the total number of matching documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total_count: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert items while keeping the total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_count: self.total_count,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
