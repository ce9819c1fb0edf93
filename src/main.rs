use kosku::server::{
    config::Config,
    model::app::AppState,
    router,
    scheduler::Scheduler,
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), kosku::server::error::Error> {
    let payment_client = startup::build_payment_client(&config)?;
    let storage = startup::build_storage(&config).await?;
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    startup::bootstrap_admin(&config, &db).await?;

    Scheduler::new(db.clone(), payment_client.clone())
        .await?
        .start()
        .await?;

    let state = AppState {
        db,
        payment_client,
        jwt: startup::build_jwt_keys(&config),
        storage,
    };

    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
