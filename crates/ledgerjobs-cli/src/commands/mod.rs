//! CLI command definitions and dispatch.

pub mod browse;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use ledgerjobs_core::error::AppError;

/// LedgerJobs — job board for chartered accountants in Ireland
#[derive(Debug, Parser)]
#[command(name = "ledgerjobs", version, about, long_about = None)]
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
    /// Start the LedgerJobs server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load sample job listings
    Seed(seed::SeedArgs),
    /// Browse the job feed interactively
    Browse(browse::BrowseArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Seed(args) => seed::execute(args, &self.config).await,
            Commands::Browse(args) => browse::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<ledgerjobs_core::config::AppConfig, AppError> {
    let path = config_path.trim_end_matches(".toml");
    ledgerjobs_core::config::AppConfig::load_file(path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &ledgerjobs_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = ledgerjobs_database::connect_pool(&config.database).await?;
    Ok(pool)
}
