//! Switchgear Service
//!
//! REST backend for substation switchgear tracking.
//! Reads configuration from TOML (`$SWITCHGEAR_CONFIG` or
//! ~/.config/switchgear-service/config.toml) plus environment overrides.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use switchgear::application::{AccountAdminService, CredentialService};
use switchgear::config::{AppConfig, LogFormat};
use switchgear::domain::RepositoryProvider;
use switchgear::infrastructure::database::migrator::Migrator;
use switchgear::infrastructure::shutdown_signal;
use switchgear::interfaces::http::modules::metrics::install_recorder;
use switchgear::{
    create_api_router, init_database, resolve_config_path, ApiServices, SeaOrmRepositoryProvider,
};

fn init_tracing(cfg: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match cfg.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = resolve_config_path();
    let (mut app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let override_error = app_cfg.apply_env_overrides().err();

    init_tracing(&app_cfg);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }
    if let Some(e) = override_error {
        error!("Ignoring environment override: {}", e);
    }

    info!("Starting Switchgear Service...");

    // ── Prometheus metrics recorder (before any metrics calls) ──
    let prometheus_handle = install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Services ───────────────────────────────────────────────
    let jwt_config = app_cfg.jwt_config();
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );
    let credentials = Arc::new(CredentialService::new(
        jwt_config,
        app_cfg.security.bcrypt_cost,
    ));
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    create_default_admin(
        &AccountAdminService::new(repos.clone(), credentials.clone()),
        &app_cfg,
    )
    .await;

    let services = ApiServices::new(repos, credentials);

    // ── REST API ───────────────────────────────────────────────
    let api_router = create_api_router(
        services,
        db.clone(),
        prometheus_handle,
        &app_cfg.cors.allowed_origins,
    );

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    if let Err(e) = axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("REST API server error: {}", e);
    }

    // ── Cleanup ────────────────────────────────────────────────
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 Switchgear Service shutdown complete");
    Ok(())
}

/// Create the configured admin account if no accounts exist
async fn create_default_admin(admin: &AccountAdminService, app_cfg: &AppConfig) {
    let cfg = &app_cfg.admin;
    match admin
        .ensure_default_admin(&cfg.name, &cfg.email, &cfg.password)
        .await
    {
        Ok(Some(_)) => {
            info!("Default admin created: {}", cfg.email);
            info!("⚠️  Please change the admin password immediately!");
        }
        Ok(None) => {}
        Err(e) => error!("Failed to create admin user: {}", e),
    }
}
