use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lifejournal_core::error::CoreError;

use crate::error::StoreError;
use crate::postgres::PgRepository;
use crate::repository::Repository;
use crate::sqlite::SqliteRepository;

/// The storage backends a [`Repository`] can be opened against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Embedded, file-based store. The schema is created on open.
    Sqlite,
    /// Client-server store. The schema must already exist.
    Postgres,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Postgres => "postgres",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "postgres" => Ok(Backend::Postgres),
            other => Err(CoreError::Config(format!(
                "Unsupported DAO '{other}'. Expected 'sqlite' or 'postgres'"
            ))),
        }
    }
}

/// Open the repository for `backend`.
///
/// `target` is the database file path for SQLite and the connection URL for
/// PostgreSQL. The SQLite branch also bootstraps its schema.
pub async fn open_repository(
    backend: Backend,
    target: &str,
) -> Result<Arc<dyn Repository>, StoreError> {
    let repo: Arc<dyn Repository> = match backend {
        Backend::Sqlite => Arc::new(SqliteRepository::connect(target).await?),
        Backend::Postgres => Arc::new(PgRepository::connect(target).await?),
    };
    tracing::info!(backend = %backend, "Repository opened");
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_backends_case_insensitively() {
        assert_eq!("sqlite".parse::<Backend>().unwrap(), Backend::Sqlite);
        assert_eq!("Postgres".parse::<Backend>().unwrap(), Backend::Postgres);
        assert_eq!(" SQLITE ".parse::<Backend>().unwrap(), Backend::Sqlite);
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = "mysql".parse::<Backend>().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().contains("mysql"));
    }

    #[test]
    fn display_round_trips() {
        for backend in [Backend::Sqlite, Backend::Postgres] {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
    }
}
