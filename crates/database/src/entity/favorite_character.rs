use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub favorite_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::entity::favorite::Entity",
        from = "Column::FavoriteId",
        to = "crate::entity::favorite::Column::Id",
        on_delete = "Cascade"
    )]
    Favorite,
    #[sea_orm(
        belongs_to = "crate::entity::character::Entity",
        from = "Column::CharacterId",
        to = "crate::entity::character::Column::Id",
        on_delete = "Cascade"
    )]
    Character,
}

impl ActiveModelBehavior for ActiveModel {}
