//! Database and server settings read from the process environment.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::net::SocketAddr;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "bookstore";
pub const DEFAULT_DB_USER: &str = "bookstore_user";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Connection parameters for the book-store database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Read `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`] with a custom variable source. Unset and empty values both fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let port = match lookup("DB_PORT").filter(|v| !v.is_empty()) {
            None => DEFAULT_DB_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                key: "DB_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
        };
        Ok(DbConfig {
            host: get("DB_HOST", DEFAULT_DB_HOST),
            port,
            name: get("DB_NAME", DEFAULT_DB_NAME),
            user: get("DB_USER", DEFAULT_DB_USER),
            password: get("DB_PASSWORD", ""),
        })
    }

    /// sqlx options equivalent to `host=.. port=.. user=.. password=.. dbname=.. sslmode=disable`.
    pub fn connect_options(&self) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("BIND_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        Ok(ServerConfig { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = DbConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.name, "bookstore");
        assert_eq!(cfg.user, "bookstore_user");
        assert_eq!(cfg.password, "");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let cfg = DbConfig::from_lookup(lookup_from(&[("DB_HOST", ""), ("DB_PORT", "")])).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
    }

    #[test]
    fn explicit_values_win() {
        let cfg = DbConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "books"),
            ("DB_USER", "reader"),
            ("DB_PASSWORD", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(
            cfg,
            DbConfig {
                host: "db.internal".into(),
                port: 6543,
                name: "books".into(),
                user: "reader".into(),
                password: "s3cret".into(),
            }
        );
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = DbConfig::from_lookup(lookup_from(&[("DB_PORT", "five")])).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }

    #[test]
    fn bind_addr_defaults_to_8080() {
        let cfg = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);

        let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "127.0.0.1:9000")])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9000");

        assert!(ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).is_err());
    }
}
