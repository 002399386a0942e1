use serde::{Deserialize, Serialize};
use starwars_database::vehicle;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub model: String,
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

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NewVehicle {
    pub name: String,
    pub description: String,
    pub model: String,
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

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateVehicle {
    pub name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
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

impl From<vehicle::Model> for Vehicle {
    fn from(val: vehicle::Model) -> Self {
        Self {
            id: val.id,
            name: val.name,
            description: val.description,
            model: val.vehicle_model,
            vehicle_class: val.vehicle_class,
            manufacturer: val.manufacturer,
            cost_in_credits: val.cost_in_credits,
            length: val.length,
            crew: val.crew,
            passengers: val.passengers,
            max_atmosphering_speed: val.max_atmosphering_speed,
            cargo_capacity: val.cargo_capacity,
            consumables: val.consumables,
            url: val.url,
        }
    }
}

impl From<NewVehicle> for vehicle::NewModel {
    fn from(val: NewVehicle) -> Self {
        Self {
            name: val.name,
            description: val.description,
            vehicle_model: val.model,
            vehicle_class: val.vehicle_class,
            manufacturer: val.manufacturer,
            cost_in_credits: val.cost_in_credits,
            length: val.length,
            crew: val.crew,
            passengers: val.passengers,
            max_atmosphering_speed: val.max_atmosphering_speed,
            cargo_capacity: val.cargo_capacity,
            consumables: val.consumables,
            url: val.url,
        }
    }
}

impl From<UpdateVehicle> for vehicle::UpdateModel {
    fn from(val: UpdateVehicle) -> Self {
        Self {
            name: val.name,
            description: val.description,
            vehicle_model: val.model,
            vehicle_class: val.vehicle_class,
            manufacturer: val.manufacturer,
            cost_in_credits: val.cost_in_credits,
            length: val.length,
            crew: val.crew,
            passengers: val.passengers,
            max_atmosphering_speed: val.max_atmosphering_speed,
            cargo_capacity: val.cargo_capacity,
            consumables: val.consumables,
            url: val.url,
        }
    }
}

impl axum::response::IntoResponse for Vehicle {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}
