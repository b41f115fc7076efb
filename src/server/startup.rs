use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::{storage::StorageError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the upload directory exists and resolves it to an absolute path.
///
/// Creates the directory (and any missing parents) when absent. Falls back to the
/// configured path if it cannot be canonicalized.
///
/// # Arguments
/// - `path` - Configured upload directory
///
/// # Returns
/// - `Ok(PathBuf)` - Directory ready to receive uploads
/// - `Err(AppError::StorageErr(NotADirectory))` - Path exists but is a file
/// - `Err(AppError::StorageErr(Inspect))` - Path could not be inspected, e.g. permission denied
/// - `Err(AppError::StorageErr(CreateDir))` - Directory could not be created
pub async fn prepare_upload_dir(path: &Path) -> Result<PathBuf, AppError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if !metadata.is_dir() => {
            return Err(StorageError::NotADirectory(path.to_path_buf()).into());
        }
        Ok(_) => {}
        Err(source) if source.kind() != ErrorKind::NotFound => {
            return Err(StorageError::Inspect {
                path: path.to_path_buf(),
                source,
            }
            .into());
        }
        Err(_) => {
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: path.to_path_buf(),
                    source,
                })?;

            tracing::info!("Created upload directory {}", path.display());
        }
    }

    Ok(tokio::fs::canonicalize(path)
        .await
        .unwrap_or_else(|_| path.to_path_buf()))
}
