//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use tube_common::{AppConfig, AppError, JwtService, StorageBackend};
use tube_core::{
    CommentRepository, EngagementLedger, SnowflakeGenerator, UserRepository, VideoRepository,
};
use tube_db::{
    create_pool, run_migrations, MemoryStore, PgCommentRepository, PgEngagementLedger,
    PgUserRepository, PgVideoRepository, PoolConfig,
};
use tube_service::ServiceContextBuilder;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Storage ports backing one server instance
struct Storage {
    users: Arc<dyn UserRepository>,
    videos: Arc<dyn VideoRepository>,
    comments: Arc<dyn CommentRepository>,
    ledger: Arc<dyn EngagementLedger>,
}

/// Build the complete Axum application with all routes and middleware
///
/// Health routes skip the rate limiter; everything else shares the outer stack.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        api.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
    );

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let storage = match config.storage.backend {
        StorageBackend::Postgres => connect_postgres(&config).await?,
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            Storage {
                users: store.clone(),
                videos: store.clone(),
                comments: store.clone(),
                ledger: store,
            }
        }
    };

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(storage.users)
        .video_repo(storage.videos)
        .comment_repo(storage.comments)
        .ledger(storage.ledger)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

async fn connect_postgres(config: &AppConfig) -> Result<Storage, AppError> {
    let db_config = config
        .database
        .as_ref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is required for the postgres backend".into()))?;

    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(db_config))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if db_config.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    Ok(Storage {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        videos: Arc::new(PgVideoRepository::new(pool.clone())),
        comments: Arc::new(PgCommentRepository::new(pool.clone())),
        ledger: Arc::new(
            PgEngagementLedger::new(pool).with_max_attempts(config.ledger.max_attempts),
        ),
    })
}

/// Run the HTTP server until Ctrl+C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
