//! tinyboard - HTTP server for the imageboard.

use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tinyboard::{AppState, Config, router};

/// tinyboard - anonymous imageboard server.
#[derive(Parser, Debug)]
#[command(name = "tinyboard")]
#[command(about = "Anonymous imageboard server", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    prepare_dirs(&config)?;
    let bind_addr = config.bind_addr.clone();

    let state = AppState::new(config)?;
    tracing::info!(
        posts = state.store.len(),
        db_path = %state.config.db_path.display(),
        "post store ready"
    );

    let app = router(state.clone()).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, site = %state.config.site_name, "board listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(posts = state.store.len(), "board stopped");
    Ok(())
}

/// Create the upload directory and log where posts and files live.
///
/// Uploads are served from below the static root, so a missing static
/// directory only means nothing else is served from it.
fn prepare_dirs(config: &Config) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.upload_dir)?;

    if !config.static_dir.is_dir() {
        tracing::warn!(static_dir = %config.static_dir.display(), "static directory missing");
    }

    let resolve = |path: &std::path::Path| {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    };
    tracing::info!(
        db_path = %resolve(&config.db_path).display(),
        upload_dir = %resolve(&config.upload_dir).display(),
        upload_url_prefix = %config.upload_url_prefix,
        "board directories"
    );
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }
}
