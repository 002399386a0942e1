use async_trait::async_trait;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    Name,
    Description,
    Model,
    VehicleClass,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
    Url,
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 120))
                    .col(text(Vehicle::Description))
                    .col(string_len(Vehicle::Model, 120))
                    .col(string_len(Vehicle::VehicleClass, 120))
                    .col(string_len(Vehicle::Manufacturer, 120))
                    .col(double(Vehicle::CostInCredits))
                    .col(double(Vehicle::Length))
                    .col(double(Vehicle::Crew))
                    .col(double(Vehicle::Passengers))
                    .col(double(Vehicle::MaxAtmospheringSpeed))
                    .col(double(Vehicle::CargoCapacity))
                    .col(string_len(Vehicle::Consumables, 120))
                    .col(string_len(Vehicle::Url, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}
