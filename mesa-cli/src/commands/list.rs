//! List command implementation.
//!
//! This module implements the `list` command, which displays the
//! reservations of a date in various formats (table, JSON, CSV, TSV),
//! optionally narrowed by a free-text search.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, resolve_date, GlobalOptions};
use clap::Args;
use mesa::config::OutputFormat;
use mesa::Reservation;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 10] = [
    "id",
    "date",
    "time",
    "customer_name",
    "phone",
    "party_size",
    "amount_due",
    "status",
    "confirmation_code",
    "note",
];

/// List the reservations for a date.
#[derive(Args)]
pub struct ListCommand {
    /// Date to list, as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Only show reservations whose name, phone or locator code match
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Output format: table, json, csv or tsv
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;
        let date = resolve_date(self.date.as_deref())?;

        // 2. Open the store and fetch the date
        let store = open_store(global, &config)?;
        let reservations = store.list_by_date(date)?;

        // 3. Apply the search
        let query = self.search.as_deref().unwrap_or("");
        let matched = mesa::search::filter(&reservations, query);

        // 4. Format and output to stdout
        match self.format.or(config.output_format).unwrap_or_default() {
            OutputFormat::Table => format_as_table(&matched)?,
            OutputFormat::Json => format_as_json(&matched)?,
            OutputFormat::Csv => format_as_delimited(&matched, b',')?,
            OutputFormat::Tsv => format_as_delimited(&matched, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tTIME\tNAME\tPHONE\tPARTY\tAMOUNT\tSTATUS\tCODE")?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{:.2}\t{}\t{}",
            res.id(),
            res.time().format("%H:%M"),
            res.customer_name(),
            res.phone(),
            res.party_size(),
            res.amount_due(),
            res.status(),
            res.confirmation_code().map_or("-", |c| c.as_str()),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, reservations)?;
    writeln!(handle)?;

    Ok(())
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[&Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS)?;

    for res in reservations {
        writer.write_record(&[
            res.id().to_string(),
            res.date().to_string(),
            res.time().format("%H:%M").to_string(),
            res.customer_name().to_string(),
            res.phone().to_string(),
            res.party_size().to_string(),
            format!("{:.2}", res.amount_due()),
            res.status().to_string(),
            res.confirmation_code()
                .map_or_else(String::new, |c| c.as_str().to_string()),
            res.note().unwrap_or("").to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
