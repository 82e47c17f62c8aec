use anyhow::Context;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::store::DbProvider;

const SETTINGS_FILE: &str = "appsettings";

/// Settings for the loader binary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base URI of the REST API
    pub host: String,
}

/// Settings for the web host binary.
///
/// Key names follow the web application's `appsettings.json`: `dbProvider`
/// and a `connectionStrings` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub environment: String,
    pub server: ServerConfig,
    #[serde(rename = "dbProvider", alias = "dbprovider")]
    pub db_provider: DbProvider,
    #[serde(
        rename = "connectionStrings",
        alias = "connectionstrings",
        alias = "ConnectionStrings"
    )]
    pub connection_strings: ConnectionStrings,
    /// Maximum pooled connections
    #[serde(rename = "maxConnections", alias = "maxconnections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionStrings {
    /// Used when the provider is PostgreSql
    #[serde(
        rename = "postgreSqlConnection",
        alias = "postgresqlconnection",
        alias = "PostgreSqlConnection"
    )]
    pub postgre_sql: Option<String>,
    /// Used when the provider is SqlServer
    #[serde(
        rename = "sqlServerConnection",
        alias = "sqlserverconnection",
        alias = "SqlServerConnection"
    )]
    pub sql_server: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            environment: "Production".to_string(),
            server: ServerConfig::default(),
            db_provider: DbProvider::default(),
            connection_strings: ConnectionStrings::default(),
            max_connections: 20,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Process environment when `None`, otherwise the given variables
pub type EnvironmentOverride = Option<config::Map<String, String>>;

impl LoaderConfig {
    /// Load configuration from `appsettings.json` in the working directory and `LOADER_*` variables
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."), None)
    }

    pub fn load_from(dir: &Path, environment: EnvironmentOverride) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&LoaderConfig::default())?)
            .add_source(config::File::from(dir.join(format!("{}.json", SETTINGS_FILE))).required(false))
            .add_source(
                config::Environment::with_prefix("LOADER")
                    .prefix_separator("_")
                    .source(environment),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The configured host as a base URL
    pub fn host_url(&self) -> anyhow::Result<Url> {
        let host = self.host.trim();
        if host.is_empty() {
            anyhow::bail!("'host' is not configured; set it in {}.json or LOADER_HOST", SETTINGS_FILE);
        }
        Url::parse(host).with_context(|| format!("'host' is not a valid URI: {}", host))
    }
}

impl WebConfig {
    /// Load `appsettings.json`, then `appsettings.{environment}.json`, then `WEB_*` variables.
    ///
    /// The environment name comes from `APP_ENVIRONMENT` and defaults to `Production`.
    pub fn load() -> anyhow::Result<Self> {
        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "Production".to_string());
        Self::load_from(Path::new("."), &environment, None)
    }

    pub fn load_from(
        dir: &Path,
        environment: &str,
        variables: EnvironmentOverride,
    ) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .set_default("environment", environment)?
            .add_source(config::File::from(dir.join(format!("{}.json", SETTINGS_FILE))).required(false))
            .add_source(
                config::File::from(dir.join(format!("{}.{}.json", SETTINGS_FILE, environment)))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("WEB")
                    .separator("_")
                    .prefix_separator("_")
                    .source(variables),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
