//! SQL database connector and utilities
//!
//! Provides connection management, migration running and a readiness probe.

mod config;
mod connector;
mod health;

pub use config::SqlConfig;
pub use connector::{connect, connect_from_config, connect_with_options, run_migrations};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseBackend, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
