//! Persistence layer for the life journal.
//!
//! The HTTP layer only sees the [`Repository`] trait. Two adapters implement
//! it: [`SqliteRepository`] (embedded file, schema created on open) and
//! [`PgRepository`] (client-server, schema provisioned by migrations).

pub mod backend;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
mod rows;
pub mod sqlite;

pub use backend::{open_repository, Backend};
pub use error::StoreError;
pub use postgres::PgRepository;
pub use repository::Repository;
pub use sqlite::SqliteRepository;
