use async_trait::async_trait;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden, Clone, Copy)]
enum Favorite {
    Table,
    Id,
}

#[derive(DeriveIden, Clone, Copy)]
enum Planet {
    Table,
    Id,
}

#[derive(DeriveIden, Clone, Copy)]
enum Character {
    Table,
    Id,
}

#[derive(DeriveIden, Clone, Copy)]
enum Vehicle {
    Table,
    Id,
}

#[derive(DeriveIden, Clone, Copy)]
enum FavoritePlanet {
    Table,
    FavoriteId,
    PlanetId,
}

#[derive(DeriveIden, Clone, Copy)]
enum FavoriteCharacter {
    Table,
    FavoriteId,
    CharacterId,
}

#[derive(DeriveIden, Clone, Copy)]
enum FavoriteVehicle {
    Table,
    FavoriteId,
    VehicleId,
}

/// Builds a join table keyed on `(favorite_id, member_id)`. The composite
/// primary key keeps each membership unique, and both foreign keys cascade so
/// deleting either side drops the link row.
fn link_table<T, F, M, R, K>(
    table: T,
    favorite_id: F,
    member_id: M,
    member: R,
    member_pk: K,
) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
    F: IntoIden + Copy + 'static,
    M: IntoIden + Copy + 'static,
    R: IntoIden + 'static,
    K: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(integer(favorite_id))
        .col(integer(member_id))
        .primary_key(Index::create().col(favorite_id).col(member_id))
        .foreign_key(
            ForeignKey::create()
                .from(table, favorite_id)
                .to(Favorite::Table, Favorite::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, member_id)
                .to(member, member_pk)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(link_table(
                FavoritePlanet::Table,
                FavoritePlanet::FavoriteId,
                FavoritePlanet::PlanetId,
                Planet::Table,
                Planet::Id,
            ))
            .await?;

        manager
            .create_table(link_table(
                FavoriteCharacter::Table,
                FavoriteCharacter::FavoriteId,
                FavoriteCharacter::CharacterId,
                Character::Table,
                Character::Id,
            ))
            .await?;

        manager
            .create_table(link_table(
                FavoriteVehicle::Table,
                FavoriteVehicle::FavoriteId,
                FavoriteVehicle::VehicleId,
                Vehicle::Table,
                Vehicle::Id,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteVehicle::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FavoritePlanet::Table).to_owned())
            .await
    }
}
