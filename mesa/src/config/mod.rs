//! Configuration system for mesa.
//!
//! This module provides layered configuration with support for:
//! - a YAML configuration file in the data directory
//! - environment variable overrides
//! - programmatic configuration via builder pattern
//! - validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`MESA_*`)
//! 3. User config (`~/.mesa/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific data directory:
//!
//! ```no_run
//! use mesa::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/srv/mesa")
//!     .build()
//!     .unwrap();
//!
//! if let Some(remote) = config.remote {
//!     println!("using {}", remote.url);
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, RemoteConfig};
pub use validator::ConfigValidator;
