//! Initialization of logging, the database, sessions and the HTTP client.

use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, ExpiredDeletion, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, util::url::join_path};

/// Interval between purges of expired sessions.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Timeout for requests to the geocoding and media APIs.
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before anything queries it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Migrates the session table and spawns a task that deletes expired sessions
/// every minute.
///
/// # Arguments
/// - `db` - Connected database; sessions share its connection pool
/// - `config` - Supplies the cookie path and whether cookies are `Secure`
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::InternalError)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let deletion_store = store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(SESSION_CLEANUP_INTERVAL)
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    Ok(session_layer(store, &config.base_path, config.production))
}

/// Session cookie settings: HttpOnly, SameSite=Lax, scoped to the base path.
pub fn session_layer(
    store: SqliteStore,
    base_path: &str,
    secure: bool,
) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(store)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_path(join_path(base_path, ""))
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )))
}

/// Builds the HTTP client for outbound API calls. Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?)
}
