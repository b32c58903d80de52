//! SQLite pool factory and migration runner for the bookshelf service.

use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use bookshelf_kernel::settings::DatabaseSettings;
use bookshelf_kernel::Migration;

/// Open the file-backed database pool, creating the file when missing.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", settings.path))
        .with_context(|| format!("invalid database path '{}'", settings.path))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open database at '{}'", settings.path))?;

    tracing::info!(path = %settings.path, "database pool ready");

    Ok(pool)
}

/// Open an in-memory database on a single connection, for tests.
///
/// A single connection is required: each in-memory SQLite connection holds
/// its own private database.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .context("failed to open in-memory database")?;

    Ok(pool)
}

/// Apply collected module migrations in order.
pub async fn run_migrations(
    pool: &SqlitePool,
    migrations: &[(String, Migration)],
) -> anyhow::Result<()> {
    for (module, migration) in migrations {
        tracing::info!(module = %module, id = migration.id, "applying migration");

        sqlx::query(migration.up)
            .execute(pool)
            .await
            .with_context(|| format!("failed to apply migration '{}/{}'", module, migration.id))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_queryable_tables() {
        let pool = connect_in_memory().await.unwrap();

        let migrations = vec![(
            "books".to_string(),
            Migration {
                id: "001_create_books",
                up: "CREATE TABLE IF NOT EXISTS books (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    author TEXT NOT NULL,
                    year INTEGER NOT NULL
                )",
            },
        )];

        run_migrations(&pool, &migrations).await.unwrap();

        sqlx::query("INSERT INTO books (title, author, year) VALUES ('t', 'a', 2000)")
            .execute(&pool)
            .await
            .unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn migrations_are_idempotent_with_if_not_exists() {
        let pool = connect_in_memory().await.unwrap();

        let migrations = vec![(
            "books".to_string(),
            Migration {
                id: "001_create_books",
                up: "CREATE TABLE IF NOT EXISTS books (id INTEGER PRIMARY KEY)",
            },
        )];

        run_migrations(&pool, &migrations).await.unwrap();
        run_migrations(&pool, &migrations).await.unwrap();
    }
}
