//! Server configuration loaded from environment variables (and `.env` via dotenvy).

use crate::error::ConfigError;
use std::str::FromStr;

/// Server configuration.
///
/// | Env Var              | Default                        |
/// |----------------------|--------------------------------|
/// | `DATABASE_URL`       | `postgres://localhost/sea_kids`|
/// | `HOST`               | `0.0.0.0`                      |
/// | `PORT`               | `8080`                         |
/// | `DB_MAX_CONNECTIONS` | `5`                            |
/// | `PUBLIC_BASE_URL`    | unset (derived from request)   |
/// | `MAX_PAGE_SIZE`      | `1000`                         |
/// | `MAX_BODY_BYTES`     | `2097152`                      |
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Prefix for HAL links, without trailing slash. When unset, links use the request's host.
    pub public_base_url: Option<String>,
    pub max_page_size: u32,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: "postgres://localhost/sea_kids".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            max_connections: 5,
            public_base_url: None,
            max_page_size: 1000,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        Ok(ServerConfig {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            public_base_url,
            max_page_size: parse_var(&lookup, "MAX_PAGE_SIZE", defaults.max_page_size)?,
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
