//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module.

pub mod ping;
pub mod serve;
