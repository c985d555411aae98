//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by an in-memory SQLite database with
//! every migration applied. Each instance is isolated; nothing touches disk.

use database::sql::{SqlConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Migrated in-memory database, dropped with the test
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let connection = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqlConfig::in_memory())
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Clone of the pooled connection, for handing to a repository
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
