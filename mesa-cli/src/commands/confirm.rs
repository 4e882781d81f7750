//! Confirm command implementation.
//!
//! This module implements the `confirm` command, which marks a
//! reservation's PIX payment as received and prints the locator code.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use mesa::{ConfirmOutcome, ConfirmPlan, PlanExecutor, ReservationId, ReservationLifecycle};

/// Confirm the PIX payment of a reservation.
#[derive(Args)]
pub struct ConfirmCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Staff member confirming the payment (default: `default_staff` from config)
    #[arg(long, value_name = "EMAIL", env = "MESA_STAFF")]
    pub staff: Option<String>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ConfirmCommand {
    /// Execute the confirm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve the id and the confirming principal
        let id: ReservationId = self
            .id
            .parse()
            .map_err(|e: mesa::ValidationError| CliError::InvalidArguments(e.message))?;

        let config = load_configuration(global)?;
        let staff = self
            .staff
            .or_else(|| config.default_staff.clone())
            .ok_or_else(|| {
                CliError::InvalidArguments(
                    "no staff member given (use --staff, MESA_STAFF or default_staff)".into(),
                )
            })?;

        // 2. Open the store
        let store = open_store(global, &config)?;
        let mut lifecycle = ReservationLifecycle::new(store);

        // 3. Dry run: report the plan only
        if self.dry_run {
            return match lifecycle.plan_confirm(&id, &staff)? {
                ConfirmPlan::Settled(outcome) => report(&outcome, global),
                ConfirmPlan::Write { plan, .. } => {
                    let mut store = lifecycle.into_store();
                    let result = PlanExecutor::new(&mut store).dry_run().execute(&plan)?;
                    if !global.quiet {
                        eprintln!("Dry run: {}", plan.description);
                        for action in &result.actions_taken {
                            eprintln!("  - {action}");
                        }
                        for warning in &result.warnings {
                            eprintln!("Warning: {warning}");
                        }
                    }
                    Ok(())
                }
            };
        }

        // 4. Confirm and print the code
        let outcome = lifecycle.confirm(&id, &staff)?;
        report(&outcome, global)
    }
}

/// Print the locator code of a successful outcome, or fail with exit code 1.
fn report(outcome: &ConfirmOutcome, global: &GlobalOptions) -> Result<(), CliError> {
    match outcome.code() {
        Some(code) => {
            println!("{code}");
            if !global.quiet {
                eprintln!("{outcome}");
            }
            Ok(())
        }
        None => Err(CliError::SemanticFailure(outcome.to_string())),
    }
}
