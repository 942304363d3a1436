//! Configuration for the questionnaire CLI.
//!
//! An optional `.apathymeter.toml` is looked up in the working directory and
//! its ancestors. Every section is optional; command-line flags win over
//! file values.

pub mod core;
pub mod loader;

pub use self::core::{ApathymeterConfig, BandConfig, BankConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
