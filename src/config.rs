//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), loaded once at startup and passed
//! down explicitly — nothing re-reads the environment at request time.

use std::fmt;
use std::net::SocketAddr;

/// Where the service is running. Purely informational: surfaced by the
/// health and root endpoints so operators can tell which deployment
/// answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Directly on a developer machine.
    Local,
    /// Inside a Docker Compose stack.
    Docker,
    /// On a Kubernetes cluster.
    Kubernetes,
}

impl DeploymentMode {
    /// Parses a mode string (case-insensitive). Unknown values fall back
    /// to [`DeploymentMode::Local`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "docker" => Self::Docker,
            "kubernetes" => Self::Kubernetes,
            _ => Self::Local,
        }
    }

    /// Returns the canonical lowercase mode string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`VoteboxConfig::from_env`].
#[derive(Debug, Clone)]
pub struct VoteboxConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string. Taken from `DATABASE_URL` when set,
    /// otherwise composed from the `DB_*` variables.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Maximum startup connection attempts before giving up.
    pub connect_max_attempts: u32,

    /// Seconds to sleep between startup connection attempts.
    pub connect_retry_delay_secs: u64,

    /// Deployment mode reported by the health and root endpoints.
    pub deployment_mode: DeploymentMode,
}

impl VoteboxConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = parse_env("DB_PORT", 5432_u16);
            let user = std::env::var("DB_USER").unwrap_or_else(|_| "votebox".to_string());
            let password = std::env::var("DB_PASSWORD").unwrap_or_else(|_| "votebox".to_string());
            let name = std::env::var("DB_NAME").unwrap_or_else(|_| "votebox".to_string());
            compose_database_url(&host, port, &user, &password, &name)
        });

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        let connect_max_attempts = parse_env("DB_CONNECT_MAX_ATTEMPTS", 30);
        let connect_retry_delay_secs = parse_env("DB_CONNECT_RETRY_DELAY_SECS", 2);

        let deployment_mode = DeploymentMode::parse(
            &std::env::var("DEPLOYMENT_MODE").unwrap_or_else(|_| "local".to_string()),
        );

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_connect_timeout_secs,
            connect_max_attempts,
            connect_retry_delay_secs,
            deployment_mode,
        })
    }
}

/// Builds a PostgreSQL connection string from its parts.
fn compose_database_url(host: &str, port: u16, user: &str, password: &str, name: &str) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn composes_database_url_from_parts() {
        let url = compose_database_url("db", 5432, "votebox", "s3cret", "votes");
        assert_eq!(url, "postgres://votebox:s3cret@db:5432/votes");
    }

    #[test]
    fn deployment_mode_parses_known_values() {
        assert_eq!(DeploymentMode::parse("docker"), DeploymentMode::Docker);
        assert_eq!(DeploymentMode::parse("KUBERNETES"), DeploymentMode::Kubernetes);
        assert_eq!(DeploymentMode::parse(" local "), DeploymentMode::Local);
    }

    #[test]
    fn deployment_mode_falls_back_to_local() {
        assert_eq!(DeploymentMode::parse("staging"), DeploymentMode::Local);
        assert_eq!(DeploymentMode::parse(""), DeploymentMode::Local);
    }

    #[test]
    fn deployment_mode_display_is_lowercase() {
        assert_eq!(DeploymentMode::Kubernetes.to_string(), "kubernetes");
    }
}
