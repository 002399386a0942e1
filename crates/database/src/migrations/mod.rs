mod m20250601_000001_create_user;
mod m20250601_000002_create_planet;
mod m20250601_000003_create_character;
mod m20250601_000004_create_vehicle;
mod m20250601_000005_create_favorite;
mod m20250601_000006_create_favorite_links;

use async_trait::async_trait;
pub use sea_orm_migration::*;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user::Migration),
            Box::new(m20250601_000002_create_planet::Migration),
            Box::new(m20250601_000003_create_character::Migration),
            Box::new(m20250601_000004_create_vehicle::Migration),
            Box::new(m20250601_000005_create_favorite::Migration),
            Box::new(m20250601_000006_create_favorite_links::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_test_db;

    #[tokio::test]
    async fn link_tables_survive_down_and_up() {
        let db = setup_test_db().await.unwrap();
        let manager = SchemaManager::new(&db.conn);

        for table in ["favorite_planet", "favorite_character", "favorite_vehicle"] {
            assert!(manager.has_table(table).await.unwrap(), "{table}");
        }

        Migrator::down(&db.conn, Some(1)).await.unwrap();
        assert!(!manager.has_table("favorite_planet").await.unwrap());

        Migrator::up(&db.conn, None).await.unwrap();
        assert!(manager.has_table("favorite_vehicle").await.unwrap());
    }
}
