//! Configuration: store and server settings from the environment, plus the
//! constants (page defaults, store deadline, envelope messages) shared by
//! every layer.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
