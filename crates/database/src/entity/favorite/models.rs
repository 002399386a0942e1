use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entity::{
    character, favorite_character, favorite_planet, favorite_vehicle, planet, vehicle,
};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub user_id: i32,
}

/// A favorite list with every member loaded in full.
#[derive(Debug, Clone, PartialEq)]
pub struct Contents {
    pub favorite: Model,
    pub planets: Vec<planet::Model>,
    pub characters: Vec<character::Model>,
    pub vehicles: Vec<vehicle::Model>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::entity::user::Entity",
        from = "Column::UserId",
        to = "crate::entity::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<crate::entity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

// The three collections are many-to-many through their join tables
impl Related<planet::Entity> for Entity {
    fn to() -> RelationDef {
        favorite_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(favorite_planet::Relation::Favorite.def().rev())
    }
}

impl Related<character::Entity> for Entity {
    fn to() -> RelationDef {
        favorite_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(favorite_character::Relation::Favorite.def().rev())
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        favorite_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(favorite_vehicle::Relation::Favorite.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub type Favorite = Entity;
