//! Whoami command — show the stored identity and its live status.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use star4ce_core::error::AppError;
use star4ce_guard::VerificationOutcome;

use crate::output::{self, OutputFormat};

/// Arguments for the whoami command
#[derive(Debug, Args)]
pub struct WhoamiArgs {
    /// Show the stored identity without asking the authority
    #[arg(long)]
    pub no_verify: bool,
}

/// Identity display row
#[derive(Debug, Serialize, Tabled)]
struct IdentityRow {
    /// Email
    email: String,
    /// Role
    role: String,
    /// Saved
    saved_at: String,
    /// Verification
    verification: String,
}

/// Execute the whoami command
pub async fn execute(
    args: &WhoamiArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config)?;
    let client = super::build_client(&config)?;

    let Some(credential) = store.credential().await else {
        output::print_warning("No active session. Run `star4ce login` first.");
        return Ok(());
    };

    let outcome = if args.no_verify {
        VerificationOutcome::NotAttempted
    } else {
        match client.verify(&credential.token).await {
            Ok(identity) if identity.ok => VerificationOutcome::Confirmed,
            _ => VerificationOutcome::Rejected,
        }
    };

    let rows = [IdentityRow {
        email: credential.email,
        role: credential.role,
        saved_at: credential.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        verification: outcome.to_string(),
    }];

    output::print_list(&rows, format);

    Ok(())
}
