//! Batch runner configuration loaded via OrthoConfig.

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Environment variable consulted when no database URL is configured.
pub const DATABASE_URL_FALLBACK_ENV: &str = "DATABASE_URL";

/// Errors raised while resolving settings into usable values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Neither the prefixed setting nor the fallback variable is set.
    #[error("database URL missing: set CUSTOMER_BATCH_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// A database URL was provided but contains only whitespace.
    #[error("{origin} must not be empty")]
    BlankDatabaseUrl { origin: &'static str },
    /// The connection pool was configured with no connections.
    #[error("CUSTOMER_BATCH_POOL_MAX_SIZE must be greater than zero")]
    ZeroPoolSize,
}

/// Configuration values controlling a batch run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CUSTOMER_BATCH")]
pub struct BatchSettings {
    /// PostgreSQL connection URL for the customer store.
    pub database_url: Option<String>,
    /// Maximum number of pooled connections.
    #[ortho_config(default = 4)]
    pub pool_max_size: u32,
    /// Optional shared deadline for both fetches, in milliseconds.
    pub run_deadline_ms: Option<u64>,
}

impl BatchSettings {
    /// Return the configured database URL, falling back to `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when no URL is available or the one found is
    /// blank.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        resolve_database_url(
            self.database_url.clone(),
            env::var(DATABASE_URL_FALLBACK_ENV).ok(),
        )
    }

    /// Return the configured pool size.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroPoolSize`] when the size is zero.
    pub const fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::ZeroPoolSize),
            size => Ok(size),
        }
    }

    /// Return the shared fetch deadline, if one is configured.
    pub fn run_deadline(&self) -> Option<Duration> {
        self.run_deadline_ms.map(Duration::from_millis)
    }
}

fn resolve_database_url(
    configured: Option<String>,
    fallback: Option<String>,
) -> Result<String, SettingsError> {
    let (value, origin) = match (configured, fallback) {
        (Some(value), _) => (value, "CUSTOMER_BATCH_DATABASE_URL"),
        (None, Some(value)) => (value, DATABASE_URL_FALLBACK_ENV),
        (None, None) => return Err(SettingsError::MissingDatabaseUrl),
    };
    if value.trim().is_empty() {
        return Err(SettingsError::BlankDatabaseUrl { origin });
    }
    Ok(value)
}
