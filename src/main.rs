//! Staff system entry point

use staff_system::{
    auth::{PasswordHasher, Sha256PasswordHasher, TokenSigner},
    config::AppConfig,
    db,
    handlers::health,
    middleware::AppState,
    repository::{
        AuditSink, EmployeeStore, PgAuditSink, PgEmployeeStore, PgSessionStore, PgUserStore,
        SessionStore, UserStore,
    },
    routes,
    services::{EmployeeService, SessionService},
    telemetry,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env files are a development convenience; production sets real
    // environment variables.
    dotenv::dotenv().ok();

    health::set_start_time();

    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    telemetry::init_telemetry(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Staff system starting");

    let db_pool = db::create_pool(&config.database).await?;
    db::run_migrations(&db_pool).await?;

    tracing::info!("Database initialized");

    let signer = TokenSigner::from_config(&config)?;
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher::from_config(&config));

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db_pool.clone()));
    let sessions: Arc<dyn SessionStore> = Arc::new(PgSessionStore::new(db_pool.clone()));
    let audit: Arc<dyn AuditSink> = Arc::new(PgAuditSink::new(db_pool.clone()));
    let employees: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(db_pool.clone()));

    let session_service = Arc::new(SessionService::new(
        users, sessions, hasher, audit, signer, &config,
    ));
    let employee_service = Arc::new(EmployeeService::new(employees));

    let state = Arc::new(AppState {
        config: config.clone(),
        db: db_pool,
        session_service,
        employee_service,
    });

    let app = routes::create_router(state);

    let addr = &config.server.addr;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }
}
