//! Show-data-dir command implementation.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;
use mesa::DatabaseConfig;

/// Print where mesa keeps its configuration and database.
#[derive(Args)]
pub struct ShowDataDirCommand {
    /// Print the database file path instead of the directory
    #[arg(long)]
    pub database: bool,
}

impl ShowDataDirCommand {
    /// Execute the show-data-dir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        let shown = if self.database {
            DatabaseConfig::in_data_dir(&data_dir).path
        } else {
            data_dir
        };

        println!("{}", shown.display());
        Ok(())
    }
}
