use starwars_core_api::AppConfig;
use starwars_database::{Database, MigratorTrait};
use tracing_subscriber::EnvFilter;

// Applies pending migrations, `--fresh` drops every table first
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let app_config = AppConfig::load("AppSettings.toml").await?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&app_config.rust_log)?)
        .init();

    let db = Database::new(&app_config.database).await?;

    if std::env::args().any(|arg| arg == "--fresh") {
        tracing::warn!("dropping all tables before migrating");
        starwars_database::Migrator::fresh(&db.conn).await?;
    } else {
        starwars_database::Migrator::up(&db.conn, None).await?;
    }

    tracing::info!("migrations applied");

    Ok(())
}
