use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect with the default pool settings for `database_url`
///
/// # Example
/// ```ignore
/// use database::sql::connect;
///
/// let db = connect("sqlite://produtos.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqlConfig::new(database_url)).await
}

/// Connect using a SqlConfig
///
/// With FromEnv (requires `config` feature):
/// ```ignore
/// use database::sql::{connect_from_config, SqlConfig};
/// use core_config::FromEnv;
///
/// let db = connect_from_config(SqlConfig::from_env()?).await?;
/// ```
pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Successfully connected to database");
    Ok(db)
}

/// Run database migrations using the provided Migrator
///
/// # Arguments
/// * `db` - Database connection
/// * `app_name` - Name of the app for logging (e.g., "produtos_api")
///
/// # Example
/// ```ignore
/// use migration::Migrator;
/// use database::sql::run_migrations;
///
/// run_migrations::<Migrator>(&db, "produtos_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
