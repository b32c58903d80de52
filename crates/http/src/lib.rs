//! HTTP server facade for the bookshelf service, built on Axum.

use anyhow::Context;
use axum::{routing::get, Router};

use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::ModuleRegistry;

pub mod error;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry
pub async fn start_server(registry: &ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    let app = build_router(registry, settings);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        api_version = %settings.api.version,
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(settings.server.shutdown_timeout_ms))
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Build the main HTTP router with all module routes mounted.
///
/// Routes are mounted before layers so the middleware wraps every module.
fn build_router(registry: &ModuleRegistry, settings: &Settings) -> Router {
    let mut builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        tracing::info!(
            module = module.name(),
            "mounting module routes under /api/{}",
            module.name()
        );
        builder = builder.mount_module(module.name(), module.routes());
    }

    if settings.logging.log_requests {
        builder = builder.with_tracing();
    }

    builder
        .with_cors(&settings.api.cors_origins)
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms)
        .build()
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

async fn shutdown_signal(shutdown_timeout_ms: u64) {
    // Errors installing the handler leave the server running until killed.
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!(
            shutdown_timeout_ms,
            "shutdown signal received, draining connections"
        );
    }
}
