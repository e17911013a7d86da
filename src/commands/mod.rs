//! CLI command definitions and dispatch.

pub mod login;
pub mod logout;
pub mod view;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use star4ce_client::AuthClient;
use star4ce_core::config::AppConfig;
use star4ce_core::error::AppError;
use star4ce_session::{FileBackend, SessionStore};

use crate::output::OutputFormat;

/// Star4ce — lead management for sales teams
#[derive(Debug, Parser)]
#[command(name = "star4ce", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and persist the session
    Login(login::LoginArgs),
    /// Clear the persisted session
    Logout,
    /// Show the stored identity and its verification status
    Whoami(whoami::WhoamiArgs),
    /// Open a protected page
    View(view::ViewArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => login::execute(args, &self.config).await,
            Commands::Logout => logout::execute(&self.config).await,
            Commands::Whoami(args) => whoami::execute(args, &self.config, self.format).await,
            Commands::View(args) => view::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open the session store configured in `[session]`
pub fn open_store(config: &AppConfig) -> Result<SessionStore, AppError> {
    let backend = match &config.session.file {
        Some(path) => FileBackend::new(path.clone()),
        None => FileBackend::default_location()?,
    };
    Ok(SessionStore::new(Arc::new(backend)))
}

/// Helper: build the authority client from `[api]`
pub fn build_client(config: &AppConfig) -> Result<AuthClient, AppError> {
    AuthClient::new(&config.api)
}
