//! `customer-batch` entry-point: runs the customer batch and its seeding helpers.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use customer_batch::config::BatchSettings;
use customer_batch::domain::ports::{CustomerBatchQuery, CustomerProvisioning};
use customer_batch::domain::{BatchResult, CustomerBatchService};
use customer_batch::outbound::observability::TracingBatchEvents;
use customer_batch::outbound::persistence::{
    DbPool, DieselCustomerRepository, PoolConfig, run_pending_migrations_async,
};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `customer-batch` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "customer-batch",
    about = "Load individual and corporate customers in one concurrent batch",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Fetch both customer collections and print the combined result as JSON.
    Run,
    /// Apply pending schema migrations.
    Migrate,
    /// Insert an individual customer.
    AddIndividual {
        /// Display name.
        #[arg(long, value_parser = parse_non_blank)]
        name: String,
        /// Contact email; must be unique across individuals.
        #[arg(long, value_parser = parse_non_blank)]
        email: String,
    },
    /// Insert a corporate customer.
    AddCorporate {
        /// Display name.
        #[arg(long, value_parser = parse_non_blank)]
        name: String,
    },
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args.command))
}

async fn async_main(command: Command) -> io::Result<()> {
    let settings = BatchSettings::load_from_iter([OsString::from("customer-batch")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let database_url = settings
        .database_url()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    match command {
        Command::Migrate => {
            let applied = run_pending_migrations_async(database_url)
                .await
                .map_err(|error| io::Error::other(format!("migrate: {error}")))?;
            info!(applied, "migrations complete");
            Ok(())
        }
        Command::Run => {
            let repository = connect(&settings, &database_url).await?;
            run_batch(&settings, repository).await
        }
        Command::AddIndividual { name, email } => {
            let repository = connect(&settings, &database_url).await?;
            repository
                .create_individual(&name, &email)
                .await
                .map_err(|error| io::Error::other(format!("add individual: {error}")))
        }
        Command::AddCorporate { name } => {
            let repository = connect(&settings, &database_url).await?;
            repository
                .create_corporate(&name)
                .await
                .map_err(|error| io::Error::other(format!("add corporate: {error}")))
        }
    }
}

async fn connect(
    settings: &BatchSettings,
    database_url: &str,
) -> io::Result<DieselCustomerRepository> {
    let max_size = settings
        .pool_max_size()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    let config = PoolConfig::new(database_url).with_max_size(max_size);
    let pool = DbPool::new(config)
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    Ok(DieselCustomerRepository::new(pool))
}

async fn run_batch(
    settings: &BatchSettings,
    repository: DieselCustomerRepository,
) -> io::Result<()> {
    let service = CustomerBatchService::new(Arc::new(repository), Arc::new(TracingBatchEvents))
        .with_optional_deadline(settings.run_deadline());

    let result = service
        .run()
        .await
        .map_err(|error| io::Error::other(format!("customer batch failed: {error}")))?;

    println!("{}", render_result(&result)?);
    Ok(())
}

fn render_result(result: &BatchResult) -> io::Result<String> {
    serde_json::to_string_pretty(result)
        .map_err(|error| io::Error::other(format!("encode batch result: {error}")))
}

fn parse_non_blank(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("value must not be blank".to_owned());
    }
    Ok(trimmed.to_owned())
}
