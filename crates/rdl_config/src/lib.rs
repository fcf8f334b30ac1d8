//! Parsing and validation of `rdl.toml` front-end configuration files.
//!
//! The file is optional in every detail: a missing section or field falls back
//! to [`ParserConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
