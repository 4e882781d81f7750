//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ConfirmCommand, CreateCommand, DashboardCommand, ListCommand, ShowDataDirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for a restaurant's reservation desk.
#[derive(Parser)]
#[command(name = "mesa")]
#[command(version, about = "Take table reservations and confirm PIX payments", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "MESA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "MESA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Use the HTTP reservation endpoint at this URL instead of the local database
    #[arg(long, value_name = "URL", global = true, env = "MESA_REMOTE_URL")]
    pub remote_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the reservations for a date
    List(ListCommand),

    /// Take a new reservation
    Create(CreateCommand),

    /// Confirm the PIX payment of a reservation
    Confirm(ConfirmCommand),

    /// Summarize a date
    Dashboard(DashboardCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),
}
