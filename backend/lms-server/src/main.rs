use lms_auth::{AccessGuard, JwtValidator};
use lms_db::ProfileRepository;
use lms_server::{AppState, ServerError, build_router, logger};
use lms_session::{
    InactivityConfig, LocalSignOut, ProviderSignOut, SessionLimits, SessionRegistry, SignOut,
};

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = lms_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = lms_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting lms-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/lms-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator: Option<Arc<JwtValidator>> = if config.auth.enabled {
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            info!("JWT: HS256 authentication enabled");
            JwtValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let config_dir = lms_config::Config::config_dir()?;
            let full_path = config_dir.join(key_path);
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            info!("JWT: RS256 authentication enabled");
            JwtValidator::with_rs256(&public_key)?
        } else {
            unreachable!("validate() ensures JWT config when auth.enabled")
        };
        Some(Arc::new(validator))
    } else {
        warn!("Authentication DISABLED - running in development mode");
        None
    };

    // Get dev user ID for anonymous mode
    let dev_user_id = config.auth.get_dev_user_id();

    // Access guard over the profile table
    let profiles = Arc::new(ProfileRepository::new(pool.clone()));
    let guard = Arc::new(AccessGuard::new(profiles));

    // Sign-out seam: provider endpoint if configured, else local-only
    let sign_out: Arc<dyn SignOut> = match config.auth.provider_sign_out_url {
        Some(ref url) => {
            info!("Provider sign-out endpoint: {url}");
            Arc::new(ProviderSignOut::new(url))
        }
        None => Arc::new(LocalSignOut),
    };

    // Session registry with the configured inactivity policy
    let monitored = config.session.enabled;
    let sessions = SessionRegistry::new(
        SessionLimits {
            max_total: config.server.max_sessions,
        },
        InactivityConfig {
            timeout: config.session.timeout(),
            warning: config.session.warning(),
            debounce: config.session.debounce(),
        },
        Arc::new(move |_identity| monitored),
        sign_out,
    );

    // Build application state
    let app_state = AppState {
        pool,
        jwt_validator,
        dev_user_id,
        guard,
        sessions,
    };

    // Build router
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    log::info!("Shutdown signal received");
}
