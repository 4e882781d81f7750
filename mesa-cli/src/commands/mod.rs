//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: List and search the reservations of a date
//! - `create`: Take a new reservation
//! - `confirm`: Confirm a payment and print the locator code
//! - `dashboard`: Summarize a date
//! - `show_data_dir`: Show resolved data directory path

pub mod confirm;
pub mod create;
pub mod dashboard;
pub mod list;
pub mod show_data_dir;

pub use confirm::ConfirmCommand;
pub use create::CreateCommand;
pub use dashboard::DashboardCommand;
pub use list::ListCommand;
pub use show_data_dir::ShowDataDirCommand;
