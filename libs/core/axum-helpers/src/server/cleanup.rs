//! Connection cleanup used during graceful shutdown.

use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Closes the SeaORM connection pool, logging the outcome.
///
/// The pool would also close on drop; closing it here waits for checked-out
/// connections and makes the shutdown visible in the logs.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_database;
///
/// close_database(db, "produtos").await;
/// ```
pub async fn close_database(db: DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!("Database connection '{}' closed successfully", name),
        Err(e) => error!("Error closing database connection '{}': {}", name, e),
    }
}
