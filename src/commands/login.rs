//! Login command — exchange credentials for a session.

use clap::Args;

use star4ce_core::error::AppError;
use star4ce_session::Credential;

use crate::output;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email to sign in with (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config)?;
    let client = super::build_client(&config)?;

    let email = match &args.email {
        Some(email) => email.clone(),
        None => dialoguer::Input::<String>::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let password = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

    let response = client.login(&email, &password).await?;

    let credential = Credential::new(response.token, response.role, response.email);
    store.set(&credential).await?;

    output::print_success(&format!(
        "Signed in as {} ({})",
        credential.email, credential.role
    ));

    Ok(())
}
