use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::geocoder::NominatimGeocoder,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations, including the reservation
/// overlap triggers. This must complete before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
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
/// The session table lives next to the application tables and is created on first start.
/// Sessions expire after the configured number of days without activity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router in
/// - `Err(AppError::DbErr)` - The session table could not be created
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        )));

    Ok(session)
}

/// Builds the Nominatim geocoder with its own HTTP client.
pub fn setup_geocoder(config: &Config) -> Result<NominatimGeocoder, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(NominatimGeocoder::new(
        client,
        config.geocoder_url.clone(),
        config.geocoder_user_agent.clone(),
    ))
}

/// Builds the CORS layer.
///
/// With `CORS_ORIGIN` set only that origin may call the API and cookies are allowed, so
/// a browser frontend can hold a session. Without it any origin is allowed, without
/// credentials.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    use axum::http::{header, HeaderValue, Method};

    let methods = [
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
    ];

    let cors = match &config.cors_origin {
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGIN".to_string(),
                    reason: e.to_string(),
                }
            })?;

            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(methods)
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    };

    Ok(cors)
}
