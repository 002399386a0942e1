use serde::Deserialize;
use zeroize::ZeroizeOnDrop;

use crate::DatabaseError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://starwars.db?mode=rwc";

// The connection string may carry credentials, so it is wiped on drop
#[derive(Deserialize, ZeroizeOnDrop, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

#[derive(Debug)]
pub struct Database {
    pub conn: sea_orm::DatabaseConnection,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let conn = sea_orm::Database::connect(config.url.as_str())
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to connect to database");
                DatabaseError::ConnectionError
            })?;

        Ok(Self { conn })
    }
}

pub async fn create_database(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    Database::new(config).await
}

/// Opens a fresh in-memory SQLite database with every migration applied.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_db() -> Result<Database, Box<dyn std::error::Error>> {
    use sea_orm_migration::MigratorTrait;

    let db = Database::new(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
    })
    .await?;

    crate::Migrator::up(&db.conn, None).await?;

    Ok(db)
}
