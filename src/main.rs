mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

use crate::application::{
    ports::{notifier::LeadNotifier, storage::ImageStore, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::domain::{
    lead::LeadRepository,
    project::{ProjectReadRepository, ProjectWriteRepository},
    project_type::ProjectTypeRepository,
    technology::TechnologyRepository,
};
use crate::infrastructure::{
    database,
    notifier::{LogOnlyNotifier, WebhookLeadNotifier},
    repositories::{
        SqliteLeadRepository, SqliteProjectReadRepository, SqliteProjectTypeRepository,
        SqliteProjectWriteRepository, SqliteTechnologyRepository,
    },
    storage::FsImageStore,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use crate::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let project_write_repo: Arc<dyn ProjectWriteRepository> =
        Arc::new(SqliteProjectWriteRepository::new(Arc::clone(&pool)));
    let project_read_repo: Arc<dyn ProjectReadRepository> =
        Arc::new(SqliteProjectReadRepository::new(Arc::clone(&pool)));
    let technology_repo: Arc<dyn TechnologyRepository> =
        Arc::new(SqliteTechnologyRepository::new(Arc::clone(&pool)));
    let project_type_repo: Arc<dyn ProjectTypeRepository> =
        Arc::new(SqliteProjectTypeRepository::new(Arc::clone(&pool)));
    let lead_repo: Arc<dyn LeadRepository> =
        Arc::new(SqliteLeadRepository::new(Arc::clone(&pool)));

    let image_store: Arc<dyn ImageStore> = Arc::new(FsImageStore::new(config.media_root()));
    let notifier: Arc<dyn LeadNotifier> = match config.lead_webhook_url() {
        Some(url) => Arc::new(WebhookLeadNotifier::new(url)),
        None => Arc::new(LogOnlyNotifier),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        project_write_repo,
        project_read_repo,
        technology_repo,
        project_type_repo,
        lead_repo,
        image_store,
        notifier,
        clock,
        slugger,
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
