// src/lib.rs
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use crate::application::{
    ports::{security::TokenAuthenticator, time::Clock},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::domain::{
    activity::ActivityLogRepository, job::JobRepository,
    job_application::JobApplicationRepository, user::UserRepository,
};
use crate::infrastructure::{
    database,
    repositories::{
        PostgresActivityLogRepository, PostgresJobApplicationRepository, PostgresJobRepository,
        PostgresUserRepository,
    },
    security::HmacTokenAuthenticator,
    time::SystemClock,
};
use crate::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let job_repo: Arc<dyn JobRepository> = Arc::new(PostgresJobRepository::new(pool.clone()));
    let application_repo: Arc<dyn JobApplicationRepository> =
        Arc::new(PostgresJobApplicationRepository::new(pool.clone()));
    let activity_repo: Arc<dyn ActivityLogRepository> =
        Arc::new(PostgresActivityLogRepository::new(pool.clone()));

    let authenticator: Arc<dyn TokenAuthenticator> = Arc::new(HmacTokenAuthenticator::new(
        config.auth_token_secret().as_bytes().to_vec(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        job_repo,
        application_repo,
        activity_repo,
        authenticator,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
