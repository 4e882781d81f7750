//! Library exports for mesa-cli.
//!
//! The CLI structure is exported so it can be exercised without spawning
//! the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
