//! ForestCamp API - campground booking-inquiry backend
//!
//! Serves the storefront data (reviews, pricing catalog, gallery, contact
//! form with quote estimates) and the session-gated admin back-office.
//!
//! Storage is pluggable: an in-memory store seeded with the fixed catalog
//! for development, or PostgreSQL for production, selected with
//! STORAGE_BACKEND.

mod auth;
mod config;
mod error;
mod estimator;
mod models;
mod routes;
mod state;
mod storage;

use crate::config::{Settings, StorageBackend};
use crate::routes::create_router;
use crate::state::AppState;
use crate::storage::{Datastore, MemoryStore, PgStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🏕️  Starting ForestCamp API...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // Initialize the configured storage backend
    let store = match settings.storage_backend {
        StorageBackend::Memory => {
            info!("💾 Using in-memory storage with seeded catalog");
            Datastore::Memory(MemoryStore::new())
        }
        StorageBackend::Postgres => {
            let Some(db_config) = settings.database.as_ref() else {
                anyhow::bail!("DATABASE_URL is required when STORAGE_BACKEND=postgres");
            };
            match PgStore::connect(db_config).await {
                Ok(store) => {
                    info!("✅ Connected to PostgreSQL (TLS: {})", db_config.require_tls);
                    Datastore::Postgres(store)
                }
                Err(e) => {
                    error!("❌ FATAL: Failed to initialize database storage: {}", e);
                    anyhow::bail!("Cannot start server without database connection");
                }
            }
        }
    };

    let state = Arc::new(AppState::new(store, &settings)?);

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   ─── Public ───");
    info!("   GET  /health                  - Health check");
    info!("   POST /api/auth/login          - Admin login");
    info!("   GET  /api/auth/session        - Session check");
    info!("   GET  /api/reviews             - Published reviews");
    info!("   POST /api/reviews             - Submit a review");
    info!("   GET  /api/pricing             - Pricing catalog");
    info!("   GET  /api/rates               - Surcharge table");
    info!("   POST /api/quote               - Price estimate");
    info!("   GET  /api/gallery             - Gallery (?featured=true)");
    info!("   POST /api/contact             - Contact form");
    info!("   GET  /api/preferences         - Site preferences");
    info!("");
    info!("   ─── Admin (session-gated) ───");
    info!("   GET  /api/admin/dashboard     - Overview counts");
    info!("   GET  /api/admin/reviews       - Moderation queue");
    info!("   GET  /api/admin/contacts      - Inquiry inbox");
    info!("   GET  /api/admin/gallery       - Gallery manager");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,forestcamp_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
