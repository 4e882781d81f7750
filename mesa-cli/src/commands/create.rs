//! Create command implementation.
//!
//! This module implements the `create` command, which takes a new
//! reservation and prints the id the store assigned.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, resolve_date, GlobalOptions};
use clap::Args;
use mesa::reservation::parse_time;
use mesa::{PlanExecutor, ReservationDraft, ReservationLifecycle};

/// Take a new reservation.
#[derive(Args)]
pub struct CreateCommand {
    /// Customer name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Contact phone
    #[arg(long, value_name = "PHONE")]
    pub phone: String,

    /// Date of the reservation, as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Time of the reservation, as HH:MM
    #[arg(long, value_name = "HH:MM", default_value = "19:00")]
    pub time: String,

    /// Number of guests
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub party_size: u32,

    /// Free-text note (allergies, seating preference, ...)
    #[arg(long, value_name = "TEXT")]
    pub note: Option<String>,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse inputs before touching the store
        let date = resolve_date(self.date.as_deref())?;
        let time = parse_time("time", &self.time).map_err(|e| CliError::InvalidArguments(e.message))?;
        let draft = ReservationDraft::new(date, time, self.name, self.phone, self.party_size)
            .note(self.note);

        // 2. Load configuration and open the store
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let mut lifecycle = ReservationLifecycle::new(store);

        // 3. Dry run: report the plan only
        if self.dry_run {
            let plan = lifecycle.plan_create(draft)?;
            let mut store = lifecycle.into_store();
            let result = PlanExecutor::new(&mut store).dry_run().execute(&plan)?;
            if !global.quiet {
                eprintln!("Dry run: {}", plan.description);
                for action in &result.actions_taken {
                    eprintln!("  - {action}");
                }
            }
            return Ok(());
        }

        // 4. Create and print the id
        let created = lifecycle.create_reservation(draft)?;
        println!("{}", created.id());

        if !global.quiet {
            eprintln!(
                "Reserved {} guest(s) for {} on {} at {}; R$ {:.2} due",
                created.party_size(),
                created.customer_name(),
                created.date(),
                created.time().format("%H:%M"),
                created.amount_due()
            );
        }

        Ok(())
    }
}
