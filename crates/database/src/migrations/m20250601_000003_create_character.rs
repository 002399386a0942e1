use async_trait::async_trait;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Character {
    Table,
    Id,
    Name,
    Description,
    Homeworld,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Url,
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 120))
                    .col(text(Character::Description))
                    .col(string_len(Character::Homeworld, 120))
                    .col(double(Character::Height))
                    .col(double(Character::Mass))
                    .col(string_len(Character::HairColor, 120))
                    .col(string_len(Character::SkinColor, 120))
                    .col(string_len(Character::EyeColor, 120))
                    .col(string_len(Character::BirthYear, 120))
                    .col(string_len(Character::Gender, 120))
                    .col(string_len(Character::Url, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}
