use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config, error::Error, service::auth::AuthService, storage::LocalStorage,
    util::jwt::JwtKeys,
};

/// Build the Midtrans Snap client for the configured environment
pub fn build_payment_client(config: &Config) -> Result<payment_gateway::Client, Error> {
    let payment_client = payment_gateway::Client::builder()
        .server_key(&config.midtrans_server_key)
        .production(config.midtrans_is_production)
        .build()?;

    Ok(payment_client)
}

pub fn build_jwt_keys(config: &Config) -> JwtKeys {
    JwtKeys::new(&config.jwt_secret)
}

/// Create the upload directory and the storage serving from it
pub async fn build_storage(config: &Config) -> Result<LocalStorage, Error> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    Ok(LocalStorage::new(&config.upload_dir, &config.public_asset_url))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = tower_sessions_redis_store::fred::prelude::Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Create the configured admin account if it does not exist yet
pub async fn bootstrap_admin(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return Ok(());
    };

    AuthService::new(db).bootstrap_admin(email, password).await
}
