//! Shared types: the response envelope and pagination.

mod pagination;
mod response;

pub use pagination::{paginate, Page, PageQuery, PageRequest};
pub use response::Envelope;
