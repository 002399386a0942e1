use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    // Named `model` in the table, renamed here so the generated
    // `Column` enum does not get a variant that reads like the struct
    #[sea_orm(column_name = "model")]
    pub vehicle_model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub cost_in_credits: f64,
    pub length: f64,
    pub crew: f64,
    pub passengers: f64,
    pub max_atmosphering_speed: f64,
    pub cargo_capacity: f64,
    pub consumables: String,
    pub url: String,
}

pub struct NewModel {
    pub name: String,
    pub description: String,
    pub vehicle_model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub cost_in_credits: f64,
    pub length: f64,
    pub crew: f64,
    pub passengers: f64,
    pub max_atmosphering_speed: f64,
    pub cargo_capacity: f64,
    pub consumables: String,
    pub url: String,
}

#[derive(Default)]
pub struct UpdateModel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<f64>,
    pub passengers: Option<f64>,
    pub max_atmosphering_speed: Option<f64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Vehicle = Entity;
