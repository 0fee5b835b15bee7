//! SQLite connection pool management.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use userhub_core::config::database::DatabaseConfig;
use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;

/// Create a SQLite connection pool from configuration.
///
/// The database file and its parent directory are created on first use,
/// and foreign-key enforcement is switched on for every connection (user
/// deletion relies on `ON DELETE CASCADE`). An in-memory database is
/// capped at a single never-reaped connection: each `:memory:` connection
/// would otherwise open its own separate database.
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    info!(
        url = %mask_password(&config.url),
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to SQLite"
    );

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Invalid database URL: {e}"), e)
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    ensure_parent_dir(&config.url).await?;

    let in_memory = config.url.contains(":memory:");
    let (max_connections, min_connections) = if in_memory {
        (1, 1)
    } else {
        (config.max_connections, config.min_connections)
    };

    let idle_timeout = if in_memory || config.idle_timeout_seconds == 0 {
        None
    } else {
        Some(Duration::from_secs(config.idle_timeout_seconds))
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(idle_timeout)
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Successfully connected to SQLite");
    Ok(pool)
}

/// Create the directory holding a file-backed database, if any.
async fn ensure_parent_dir(url: &str) -> AppResult<()> {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if path.is_empty() || path.starts_with(':') {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to create database directory: {e}"),
                    e,
                )
            })?;
        }
    }
    Ok(())
}

/// Mask any password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_password() {
        assert_eq!(
            mask_password("sqlite://data/userhub.db"),
            "sqlite://data/userhub.db"
        );
        assert_eq!(
            mask_password("db://user:secret@localhost:5432/users"),
            "db://user:****@localhost:5432/users"
        );
    }
}
