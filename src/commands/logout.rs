//! Logout command — clear the persisted session.

use star4ce_core::error::AppError;

use crate::output;

/// Execute the logout command. Safe to run with no active session.
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config)?;

    store.clear().await?;
    output::print_success("Session cleared");

    Ok(())
}
