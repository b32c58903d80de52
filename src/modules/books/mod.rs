pub mod models;
pub mod repo;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use sqlx::SqlitePool;

use bookshelf_kernel::{InitCtx, Migration, Module};

/// Books resource module. Owns the storage handle it was constructed with.
pub struct BooksModule {
    pool: SqlitePool,
}

impl BooksModule {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.pool.clone())
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_books",
            up: r#"
                CREATE TABLE IF NOT EXISTS books (
                    id     INTEGER PRIMARY KEY AUTOINCREMENT,
                    title  TEXT NOT NULL,
                    author TEXT NOT NULL,
                    year   INTEGER NOT NULL
                )
                "#,
        }]
    }
}

/// Create a new instance of the books module
pub fn create_module(pool: SqlitePool) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(pool))
}

/// In-memory pool with the books schema applied, for tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = bookshelf_db::connect_in_memory().await.unwrap();

    let module = BooksModule::new(pool.clone());
    let migrations: Vec<(String, Migration)> = module
        .migrations()
        .into_iter()
        .map(|migration| (module.name().to_string(), migration))
        .collect();
    bookshelf_db::run_migrations(&pool, &migrations)
        .await
        .unwrap();

    pool
}
