use crate::Result as DbErrorResult;

use std::path::Path;
use std::time::Duration;

use log::debug;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Open (creating if needed) the SQLite database at `path` in WAL mode
pub async fn connect(
    path: &Path,
    pool_size: u32,
    busy_timeout: Duration,
) -> DbErrorResult<SqlitePool> {
    debug!("Opening {} (pool size {pool_size})", path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(pool_size)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(busy_timeout),
        )
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
