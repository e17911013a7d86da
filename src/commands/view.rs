//! View command — open a protected page behind the access guard.

use clap::{Args, ValueEnum};

use star4ce_core::error::AppError;
use star4ce_guard::{AccessGuard, GuardDecision, ProtectionPolicy};
use star4ce_session::Credential;

use crate::output;

/// Protected placeholder pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    /// Lead dashboard
    Dashboard,
    /// Administration area
    Admin,
}

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Page to open
    #[arg(value_enum)]
    pub page: Page,

    /// Trust the stored session without asking the authority (weak mode)
    #[arg(long)]
    pub no_verify: bool,
}

/// Execute the view command
pub async fn execute(args: &ViewArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config)?;
    let client = super::build_client(&config)?;
    let guard = AccessGuard::new(store, client);

    let policy = if args.no_verify {
        ProtectionPolicy::weak()
    } else {
        ProtectionPolicy::default()
    };

    // Neutral indicator while the evaluation is not yet terminal.
    println!("Checking session...");

    match guard.evaluate(policy).await {
        GuardDecision::Allow(credential) => {
            render(args.page, &credential);
            Ok(())
        }
        GuardDecision::Deny(redirect) => {
            output::print_warning("Your session has expired or is invalid.");
            println!("Continue at {}", redirect.location());
            // Denial must be visible to scripts as a non-zero exit.
            Err(AppError::authentication("session expired or invalid"))
        }
        // Single-shot CLI evaluations are never raced; nothing to show.
        GuardDecision::Superseded => Ok(()),
    }
}

fn render(page: Page, credential: &Credential) {
    match page {
        Page::Dashboard => {
            println!("── Dashboard ──────────────────────────");
            output::print_kv("Signed in as", &credential.email);
            output::print_kv("Role", &credential.role);
            println!("Your leads will appear here soon.");
        }
        Page::Admin => {
            println!("── Administration ─────────────────────");
            output::print_kv("Signed in as", &credential.email);
            println!("Team and billing management is coming soon.");
        }
    }
}
