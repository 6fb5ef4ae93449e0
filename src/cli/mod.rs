//! CLI module - Command-line interface for the application.
//!
//! - `serve` starts the HTTP server
//! - `ping` checks MongoDB connectivity

pub mod args;

pub use args::{Cli, Commands, ServeArgs};
