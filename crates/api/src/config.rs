use std::path::PathBuf;
use std::str::FromStr;

use lifejournal_core::error::CoreError;
use lifejournal_db::Backend;

/// Transport the listener speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    /// TLS with a certificate from `TLS_CERT_PATH`, self-signed on first run.
    Https,
}

impl FromStr for Protocol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(CoreError::Config(format!(
                "Invalid PROTOCOL '{other}'. Must be 'http' or 'https'"
            ))),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CoreError::Config(format!(
                "Invalid LOG_FORMAT '{other}'. Must be 'text' or 'json'"
            ))),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    pub protocol: Protocol,
    /// Storage backend selected by `DAO`.
    pub backend: Backend,
    /// SQLite file path or PostgreSQL URL, depending on `backend`.
    pub database_target: String,
    /// Directory holding the HTML pages, `style.css` and `img.png`.
    pub static_dir: PathBuf,
    /// Directory uploaded photos are copied into, served under `/uploads`.
    pub upload_dir: PathBuf,
    pub tls_cert_path: PathBuf,
    pub tls_key_path: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for in-flight TLS connections on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Body limit for photo uploads (default: 32 MiB).
    pub max_upload_bytes: usize,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                   |
    /// |-------------------------|---------------------------|
    /// | `HOST`                  | `0.0.0.0`                 |
    /// | `PORT`                  | `8080`                    |
    /// | `PROTOCOL`              | required                  |
    /// | `DAO`                   | `sqlite`                  |
    /// | `SQLITE_PATH`           | `./life_journal.sqlite`   |
    /// | `DATABASE_URL`          | required for `postgres`   |
    /// | `STATIC_DIR`            | `./static`                |
    /// | `UPLOAD_DIR`            | `./uploads`               |
    /// | `TLS_CERT_PATH`         | `./cert.pem`              |
    /// | `TLS_KEY_PATH`          | `./private.key`           |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                      |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                      |
    /// | `MAX_UPLOAD_BYTES`      | `33554432`                |
    /// | `LOG_FORMAT`            | `text`                    |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend: Backend = var("DAO", "sqlite").parse()?;
        let database_target = match backend {
            Backend::Sqlite => var("SQLITE_PATH", "./life_journal.sqlite"),
            Backend::Postgres => lookup("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| {
                    CoreError::Config("DATABASE_URL must be set when DAO=postgres".into())
                })?,
        };

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse_number("PORT", &var("PORT", "8080"))?,
            protocol: lookup("PROTOCOL")
                .ok_or_else(|| {
                    CoreError::Config("PROTOCOL must be set to 'http' or 'https'".into())
                })?
                .parse()?,
            backend,
            database_target,
            static_dir: PathBuf::from(var("STATIC_DIR", "./static")),
            upload_dir: PathBuf::from(var("UPLOAD_DIR", "./uploads")),
            tls_cert_path: PathBuf::from(var("TLS_CERT_PATH", "./cert.pem")),
            tls_key_path: PathBuf::from(var("TLS_KEY_PATH", "./private.key")),
            request_timeout_secs: parse_number(
                "REQUEST_TIMEOUT_SECS",
                &var("REQUEST_TIMEOUT_SECS", "30"),
            )?,
            shutdown_timeout_secs: parse_number(
                "SHUTDOWN_TIMEOUT_SECS",
                &var("SHUTDOWN_TIMEOUT_SECS", "30"),
            )?,
            max_upload_bytes: parse_number(
                "MAX_UPLOAD_BYTES",
                &var("MAX_UPLOAD_BYTES", "33554432"),
            )?,
            log_format: var("LOG_FORMAT", "text").parse()?,
        })
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Config(format!("{key} must be a valid number, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Load with `PROTOCOL=http` unless `vars` overrides it.
    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, CoreError> {
        let vars: HashMap<String, String> = [("PROTOCOL", "http")]
            .iter()
            .chain(vars)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_select_sqlite() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.protocol, Protocol::Http);
        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(config.database_target, "./life_journal.sqlite");
        assert_eq!(config.upload_dir, PathBuf::from("./uploads"));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn protocol_is_case_insensitive() {
        let config = load(&[("PROTOCOL", "HTTPS")]).unwrap();
        assert_eq!(config.protocol, Protocol::Https);
    }

    #[test]
    fn protocol_is_required() {
        let err = ServerConfig::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains("PROTOCOL"));
        assert!(load(&[("PROTOCOL", "")]).is_err());
    }

    #[test]
    fn unknown_protocol_is_rejected() {
        let err = load(&[("PROTOCOL", "ftp")]).unwrap_err();
        assert!(err.to_string().contains("PROTOCOL"));
    }

    #[test]
    fn unknown_dao_is_rejected() {
        assert!(load(&[("DAO", "mongodb")]).is_err());
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = load(&[("DAO", "postgres")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));

        let config = load(&[
            ("DAO", "postgres"),
            ("DATABASE_URL", "postgres://localhost/journal"),
        ])
        .unwrap();
        assert_eq!(config.backend, Backend::Postgres);
        assert_eq!(config.database_target, "postgres://localhost/journal");
    }

    #[test]
    fn sqlite_path_is_configurable() {
        let config = load(&[("SQLITE_PATH", "/var/lib/journal.db")]).unwrap();
        assert_eq!(config.database_target, "/var/lib/journal.db");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn json_log_format() {
        let config = load(&[("LOG_FORMAT", "json")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
