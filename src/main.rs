use std::process::ExitCode;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::database::activity_store::ActivityStore;
use mergington::database::seed;
use mergington::web::router::build_router;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 1. Logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), ?config, "starting");

    // 2. Activity directory
    let store = match &config.seed_file {
        Some(path) => match seed::load_catalog_file(path) {
            Ok(catalog) => {
                let activities = catalog.len();
                tracing::info!(path = %path.display(), activities, "loaded seed catalog");
                ActivityStore::new(catalog)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "cannot load seed catalog");
                return ExitCode::FAILURE;
            }
        },
        None => ActivityStore::seeded(),
    };

    // 3. Router
    let app = build_router(store, &config.static_dir);

    // 4. Bind (with fallback port)
    let addr = match config.addr() {
        Ok(a) => a,
        Err(e) => {
            let (host, port) = (&config.host, config.port);
            tracing::error!(%host, port, error = %e, "cannot parse host/port");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                tracing::error!(%addr, error = %e, "cannot bind and no fallback port left");
                return ExitCode::FAILURE;
            };
            tracing::warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!(%fallback, error = %e, "cannot bind fallback port");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => tracing::info!("server listening on http://{}", bound),
        Err(e) => tracing::warn!(error = %e, "cannot read bound address"),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    tracing::info!("server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
