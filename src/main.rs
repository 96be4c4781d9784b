//! Immagreat HTTP server.
//!
//! Loads configuration from `IMMAGREAT__*` environment variables (and `.env`),
//! picks PostgreSQL or in-memory repositories, and serves the API until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use immagreat::adapters::auth::{Argon2PasswordHasher, JwtSessionManager};
use immagreat::adapters::http::auth::SessionCookie;
use immagreat::adapters::http::{app_router, with_http_layers, AppDependencies};
use immagreat::adapters::livekit::LiveKitTokenIssuer;
use immagreat::adapters::memory::{InMemoryClassroomRepository, InMemoryUserRepository};
use immagreat::adapters::postgres::{self, PostgresClassroomRepository, PostgresUserRepository};
use immagreat::config::{AppConfig, DatabaseConfig, ServerConfig};
use immagreat::ports::{ClassroomRepository, RoomTokenIssuer, UserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    tracing::info!(environment = ?config.server.environment, "Starting Immagreat");

    let (users, classrooms) = build_repositories(&config.database).await?;

    let sessions = Arc::new(JwtSessionManager::from_config(&config.auth));
    let room_tokens = config.livekit.as_ref().map(|livekit| {
        Arc::new(LiveKitTokenIssuer::from_config(livekit)) as Arc<dyn RoomTokenIssuer>
    });
    if room_tokens.is_none() {
        tracing::warn!("LiveKit is not configured; live room tokens are unavailable");
    }

    let deps = AppDependencies {
        users,
        classrooms,
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        token_issuer: sessions.clone(),
        session_validator: sessions,
        room_tokens,
        cookie: SessionCookie::from_config(&config.auth, config.is_production()),
    };
    let app = with_http_layers(app_router(deps), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

async fn build_repositories(
    database: &DatabaseConfig,
) -> anyhow::Result<(Arc<dyn UserRepository>, Arc<dyn ClassroomRepository>)> {
    if !database.is_configured() {
        tracing::warn!("No database URL configured; using in-memory repositories");
        return Ok((
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryClassroomRepository::new()),
        ));
    }

    let pool = postgres::connect(database)
        .await
        .context("failed to connect to PostgreSQL")?;
    if database.run_migrations {
        postgres::run_migrations(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("Database migrations applied");
    }

    Ok((
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresClassroomRepository::new(pool)),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
