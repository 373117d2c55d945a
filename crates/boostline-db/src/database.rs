use boostline_migrations::MigratorTrait as _;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use url::Url;

use crate::errors::{DbError, DbResult};

fn sqlite_url<P: AsRef<Path>>(path: P, query: &str) -> Url {
    let mut url = Url::parse("sqlite:///").expect("sqlite:/// is a valid URL base");
    url.set_path(&path.as_ref().to_string_lossy());
    url.set_query(Some(query));
    url
}

async fn connect(url: &Url) -> DbResult<DatabaseConnection> {
    // One writer at a time under SQLite; a single pooled connection
    // serializes transactions instead of surfacing busy errors.
    let mut options = ConnectOptions::new(url.as_str().to_owned());
    options.max_connections(1).sqlx_logging(false);
    Ok(Database::connect(options).await?)
}

/// Open (or create) the marketplace database at `path` and bring its schema
/// up to date.
pub async fn open_db<P: AsRef<Path>>(path: P) -> DbResult<DatabaseConnection> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = connect(&sqlite_url(path, "mode=rwc")).await?;
    boostline_migrations::Migrator::up(&conn, None).await?;
    Ok(conn)
}

/// Open a saved database backup in read-only mode.
pub async fn open_readonly_db<P: AsRef<Path>>(path: P) -> DbResult<DatabaseConnection> {
    connect(&sqlite_url(path, "mode=ro")).await
}

/// Create a fresh, empty database with all migrations applied.
///
/// The database is backed by a temporary file but this is an implementation
/// detail; callers should treat it as an ephemeral writeable space. Used by
/// the test fixture and the CLI's dry-run paths.
pub async fn new_scratch_db() -> DbResult<DatabaseConnection> {
    let temp = tempfile::NamedTempFile::new()?;
    let conn = connect(&sqlite_url(temp.path(), "mode=rw")).await?;
    boostline_migrations::Migrator::up(&conn, None).await?;

    // Keep the temp file alive for the life of the process.
    std::mem::forget(temp);

    Ok(conn)
}

/// Backup a database to a compact file suitable for archival.
///
/// The file is marked read-only after creation to prevent accidental
/// modification.
///
/// # Errors
///
/// Returns an error if the target file already exists.
pub async fn backup_db<P: AsRef<Path>>(conn: &DatabaseConnection, path: P) -> DbResult<()> {
    let path = path.as_ref();

    if path.exists() {
        return Err(DbError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Database file already exists: {}", path.display()),
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // SQLite's VACUUM INTO produces a compact single-file copy.
    let path_str = path.to_string_lossy();
    let vacuum_stmt = sea_orm::Statement::from_string(
        sea_orm::DbBackend::Sqlite,
        format!("VACUUM INTO '{}'", path_str.replace('\'', "''")),
    );

    conn.execute(vacuum_stmt).await?;

    if !path.exists() {
        return Err(DbError::Io(std::io::Error::other(
            "Database file was not created",
        )));
    }

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(path, perms)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scratch_db_has_schema_applied() {
        let conn = new_scratch_db().await.expect("create scratch db");

        let stmt = sea_orm::Statement::from_string(
            sea_orm::DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'campaigns'",
        );
        let row = conn.query_one(stmt).await.expect("query sqlite_master");
        assert!(row.is_some(), "campaigns table should exist");
    }

    #[tokio::test]
    async fn backup_refuses_to_overwrite() {
        let conn = new_scratch_db().await.expect("create scratch db");

        let target = tempfile::NamedTempFile::new().expect("temp file");
        let err = backup_db(&conn, target.path()).await.unwrap_err();
        assert!(matches!(err, DbError::Io(_)));
    }

    #[tokio::test]
    async fn backup_round_trips_readonly() {
        let conn = new_scratch_db().await.expect("create scratch db");

        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("backup.db");
        backup_db(&conn, &target).await.expect("backup");

        let restored = open_readonly_db(&target).await.expect("open backup");
        let stmt = sea_orm::Statement::from_string(
            sea_orm::DbBackend::Sqlite,
            "SELECT count(*) AS n FROM accounts",
        );
        let row = restored.query_one(stmt).await.expect("query accounts");
        assert!(row.is_some());
    }
}
