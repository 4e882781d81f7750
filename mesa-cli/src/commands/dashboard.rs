//! Dashboard command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, resolve_date, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;

/// Summarize a date: reservations, confirmations, revenue and pending payments.
#[derive(Args)]
pub struct DashboardCommand {
    /// Date to summarize, as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: DashboardFormat,
}

/// Output format for the dashboard command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DashboardFormat {
    /// One metric per line
    Table,
    /// JSON object
    Json,
}

impl DashboardCommand {
    /// Execute the dashboard command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let date = resolve_date(self.date.as_deref())?;

        let store = open_store(global, &config)?;
        let summary = mesa::dashboard::try_summarize(&store, date)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            DashboardFormat::Table => {
                writeln!(handle, "DATE\t{date}")?;
                writeln!(handle, "RESERVATIONS\t{}", summary.total_reservations)?;
                writeln!(handle, "CONFIRMED\t{}", summary.total_confirmed)?;
                writeln!(handle, "REVENUE\t{}", summary.revenue_display())?;
                writeln!(handle, "PENDING\t{}", summary.total_pending)?;
            }
            DashboardFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &summary)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
