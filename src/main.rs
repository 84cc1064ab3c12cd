use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::EnvFilter;

use shelter_api::config::Config;
use shelter_api::handlers::ANIMALS_PATH;
use shelter_api::migrations::Migrator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();
    let db = Database::connect(config.connect_options()).await?;
    Migrator::up(&db, None).await?;

    let app = shelter_api::build_router(&db, &config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("API: http://{}{ANIMALS_PATH}", listener.local_addr()?);
    tracing::info!("Docs: http://{}/docs", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
