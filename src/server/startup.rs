use crate::server::{config::Config, error::AppError};

/// Connects to the player store database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the `fivem_player` table is
/// up-to-date. This function must complete successfully before the application can serve
/// requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Warns once at startup when the game server credentials are incomplete.
///
/// The server still starts; schema analysis and sync return a configuration error until
/// the credentials are provided.
pub fn check_source_credentials(config: &Config) {
    if let Some(missing) = config.source.missing_credential() {
        tracing::warn!(
            "{} is not set; schema analysis and player sync are unavailable",
            missing
        );
    }
}
