//! Database library providing the SQL connector and utilities used by the services
//!
//! Connections go through SeaORM, so the same code serves the embedded SQLite store
//! (the default) and PostgreSQL. The backend is picked from the URL scheme.
//!
//! # Features
//!
//! - `sql` (default) - SQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sql;
//! use migration::Migrator;
//!
//! let db = sql::connect("sqlite://produtos.db?mode=rwc").await?;
//! sql::run_migrations::<Migrator>(&db, "produtos_api").await?;
//! sql::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
