//! UserHub Server — user accounts, action ledger, and histograms
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use userhub_core::config::AppConfig;
use userhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("USERHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting UserHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = userhub_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    userhub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(userhub_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let action_repo = Arc::new(userhub_database::repositories::ActionRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(userhub_auth::password::PasswordHasher::new());
    let token_encoder = Arc::new(userhub_auth::token::TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(userhub_auth::token::TokenDecoder::new(&config.auth));
    let guard = Arc::new(userhub_auth::guard::IdentityGuard::new(
        Arc::clone(&token_decoder),
        Arc::clone(&user_repo),
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    let audit_service = Arc::new(userhub_service::audit::AuditService::new(Arc::clone(
        &action_repo,
    )));
    let account_service = Arc::new(userhub_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_encoder),
        Arc::clone(&audit_service),
    ));
    let histogram_service = Arc::new(userhub_service::histogram::HistogramService::new(
        Arc::clone(&action_repo),
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = userhub_api::state::AppState {
        guard,
        account_service,
        audit_service,
        histogram_service,
    };

    let app = userhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("UserHub server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("UserHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
