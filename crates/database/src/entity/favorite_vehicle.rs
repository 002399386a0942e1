use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub favorite_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub vehicle_id: i32,
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
        belongs_to = "crate::entity::vehicle::Entity",
        from = "Column::VehicleId",
        to = "crate::entity::vehicle::Column::Id",
        on_delete = "Cascade"
    )]
    Vehicle,
}

impl ActiveModelBehavior for ActiveModel {}
