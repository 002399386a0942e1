use async_trait::async_trait;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
    Name,
    Description,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
    Url,
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 120))
                    .col(text(Planet::Description))
                    .col(double(Planet::Diameter))
                    .col(double(Planet::RotationPeriod))
                    .col(double(Planet::OrbitalPeriod))
                    .col(double(Planet::Gravity))
                    .col(big_integer(Planet::Population))
                    .col(string(Planet::Climate))
                    .col(string(Planet::Terrain))
                    .col(double(Planet::SurfaceWater))
                    .col(string_len(Planet::Url, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}
