use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// The main model used throughout the application
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    // Argon2 PHC string, never the plaintext password
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

// This model is to be used for creating new database rows, the user's
// favorite list is created alongside it
pub struct NewModel {
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub favorite_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "crate::entity::favorite::Entity")]
    Favorite,
}

impl Related<crate::entity::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub type User = Entity;
