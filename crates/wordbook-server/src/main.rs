use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use wordbook_core::dict::{DictStore, Dictionary};
use wordbook_core::settings;
use wordbook_core::suggest::LookupEngine;
use wordbook_server::trace_init::{init_tracing, LogFormat};
use wordbook_server::{build_router, AppState};

#[derive(Parser)]
#[command(name = "wordbook-server", about = "Serve dictionary lookups over HTTP")]
struct Args {
    /// Snapshot file (default: server.dict_path from settings)
    #[arg(long)]
    dict: Option<PathBuf>,
    /// Listen address (default: server.addr from settings)
    #[arg(long)]
    addr: Option<SocketAddr>,
    /// Directory for frontend files; empty disables (default: server.static_dir)
    #[arg(long = "static-dir")]
    static_dir: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
    /// Write JSON logs to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_format, args.log_dir.as_deref());

    if let Some(path) = &args.config {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        settings::init_custom(content).context("invalid settings")?;
    }
    let s = settings::settings();

    let dict_path = args
        .dict
        .clone()
        .unwrap_or_else(|| PathBuf::from(&s.server.dict_path));
    let addr = match args.addr {
        Some(addr) => addr,
        None => s.server.addr.parse().context("invalid server.addr")?,
    };
    let static_dir = args
        .static_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&s.server.static_dir));

    let store = DictStore::open(&dict_path)
        .with_context(|| format!("failed to load dictionary {}", dict_path.display()))?;
    info!(words = store.count(), path = %dict_path.display(), "dictionary loaded");

    let engine = LookupEngine::with_limits(store, s.suggest.limits());
    let static_dir = Some(static_dir.as_path()).filter(|d| !d.as_os_str().is_empty());
    let app = build_router(AppState::new(engine), static_dir);

    log_endpoints(&addr, static_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    info!("server stopped");
    Ok(())
}

fn log_endpoints(addr: &SocketAddr, static_dir: Option<&Path>) {
    info!("starting server on {addr}");
    info!("  GET /health - health check");
    info!("  GET /api/v1/words/:word - lookup word");
    info!("  GET /api/v1/suggest/:prefix?limit=N - autocomplete suggestions");
    info!("  GET /api/v1/stats - statistics");
    match static_dir {
        Some(dir) if dir.is_dir() => info!("serving static files from {}", dir.display()),
        Some(dir) => info!("static dir {} not found, frontend disabled", dir.display()),
        None => {}
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
