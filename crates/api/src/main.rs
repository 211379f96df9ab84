use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifejournal_api::config::{LogFormat, Protocol, ServerConfig};
use lifejournal_api::router::build_app_router;
use lifejournal_api::state::AppState;
use lifejournal_api::tls;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(
        host = %config.host,
        port = config.port,
        protocol = ?config.protocol,
        backend = %config.backend,
        "Loaded server configuration",
    );

    // --- Repository ---
    let repo = lifejournal_db::open_repository(config.backend, &config.database_target)
        .await
        .expect("Failed to open repository");

    repo.health_check()
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("Failed to create upload directory");

    // --- App state ---
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    match config.protocol {
        Protocol::Http => serve_http(addr, app).await,
        Protocol::Https => serve_https(addr, app, &config).await,
    }

    tracing::info!("Graceful shutdown complete");
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "lifejournal_api=debug,lifejournal_db=info,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn serve_http(addr: SocketAddr, app: Router) {
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn serve_https(addr: SocketAddr, app: Router, config: &ServerConfig) {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let generated =
        tls::ensure_self_signed_certificate(&config.tls_cert_path, &config.tls_key_path)
            .await
            .expect("Failed to provision TLS certificate");
    if generated {
        tracing::info!(cert = %config.tls_cert_path.display(), "Self-signed certificate written");
    }

    let tls_config = RustlsConfig::from_pem_file(&config.tls_cert_path, &config.tls_key_path)
        .await
        .expect("Failed to load TLS certificate");

    let handle = Handle::new();
    let grace = Duration::from_secs(config.shutdown_timeout_secs);
    tokio::spawn({
        let handle = handle.clone();
        async move {
            shutdown_signal().await;
            handle.graceful_shutdown(Some(grace));
        }
    });

    tracing::info!(%addr, "Starting HTTPS server");

    axum_server::bind_rustls(addr, tls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
