use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::config::WebConfig;

/// Database backends the web host can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DbProvider {
    #[serde(alias = "mysql")]
    MySql,
    #[default]
    #[serde(alias = "postgresql", alias = "postgres")]
    PostgreSql,
    #[serde(alias = "sqlserver", alias = "mssql")]
    SqlServer,
}

impl fmt::Display for DbProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DbProvider::MySql => "MySql",
            DbProvider::PostgreSql => "PostgreSql",
            DbProvider::SqlServer => "SqlServer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database provider {0} is not supported by this host")]
    UnsupportedProvider(DbProvider),

    #[error("no connection string configured for {0}")]
    MissingConnectionString(DbProvider),

    #[error("invalid connection string for {provider}")]
    Pool {
        provider: DbProvider,
        #[source]
        source: sqlx::Error,
    },
}

/// The persistence layer installed for the configured provider
#[derive(Debug, Clone)]
pub struct Persistence {
    provider: DbProvider,
    pool: PgPool,
}

impl Persistence {
    pub fn provider(&self) -> DbProvider {
        self.provider
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query to check the database is reachable
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Install the persistence layer selected by `config.db_provider`.
///
/// Connections are opened on first use, so a host can start before its
/// database does. Must be called from within a tokio runtime.
pub fn install(config: &WebConfig) -> Result<Persistence, BootstrapError> {
    match config.db_provider {
        DbProvider::PostgreSql => {
            let provider = DbProvider::PostgreSql;
            let url = config
                .connection_strings
                .postgre_sql
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .ok_or(BootstrapError::MissingConnectionString(provider))?;

            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(Duration::from_secs(5))
                .connect_lazy(url)
                .map_err(|source| BootstrapError::Pool { provider, source })?;

            Ok(Persistence { provider, pool })
        }
        // No driver for these in the sqlx stack this host is built with
        provider @ (DbProvider::MySql | DbProvider::SqlServer) => {
            Err(BootstrapError::UnsupportedProvider(provider))
        }
    }
}
