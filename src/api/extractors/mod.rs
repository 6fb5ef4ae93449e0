//! Custom request extractors.

mod envelope_json;

pub use envelope_json::EnvelopeJson;
