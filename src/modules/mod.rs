pub mod books;

use sqlx::SqlitePool;

use bookshelf_kernel::ModuleRegistry;

/// Register all resource modules, handing each the shared storage handle
pub fn register_all(registry: &mut ModuleRegistry, pool: &SqlitePool) {
    registry.register(books::create_module(pool.clone()));
}
