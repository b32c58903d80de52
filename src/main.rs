mod modules;

use anyhow::Context;
use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::{InitCtx, ModuleRegistry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    // `RUST_LOG` wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.path,
        api_version = %settings.api.version,
        "bookshelf bootstrap starting"
    );

    let pool = bookshelf_db::connect(&settings.database)
        .await
        .with_context(|| "failed to open database")?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &pool);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;

    if settings.database.auto_migrate {
        bookshelf_db::run_migrations(&pool, &registry.collect_migrations())
            .await
            .with_context(|| "failed to run migrations")?;
    }

    bookshelf_http::start_server(&registry, &settings).await
}
