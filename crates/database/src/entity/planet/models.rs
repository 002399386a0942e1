use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub diameter: f64,
    pub rotation_period: f64,
    pub orbital_period: f64,
    pub gravity: f64,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
    pub surface_water: f64,
    pub url: String,
}

pub struct NewModel {
    pub name: String,
    pub description: String,
    pub diameter: f64,
    pub rotation_period: f64,
    pub orbital_period: f64,
    pub gravity: f64,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
    pub surface_water: f64,
    pub url: String,
}

// Every field is optional, only the ones that are present get written
#[derive(Default)]
pub struct UpdateModel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub diameter: Option<f64>,
    pub rotation_period: Option<f64>,
    pub orbital_period: Option<f64>,
    pub gravity: Option<f64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<f64>,
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Planet = Entity;
