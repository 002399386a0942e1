use serde::{Deserialize, Serialize};
use starwars_database::planet;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
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

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NewPlanet {
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

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdatePlanet {
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

impl From<planet::Model> for Planet {
    fn from(val: planet::Model) -> Self {
        Self {
            id: val.id,
            name: val.name,
            description: val.description,
            diameter: val.diameter,
            rotation_period: val.rotation_period,
            orbital_period: val.orbital_period,
            gravity: val.gravity,
            population: val.population,
            climate: val.climate,
            terrain: val.terrain,
            surface_water: val.surface_water,
            url: val.url,
        }
    }
}

impl From<NewPlanet> for planet::NewModel {
    fn from(val: NewPlanet) -> Self {
        Self {
            name: val.name,
            description: val.description,
            diameter: val.diameter,
            rotation_period: val.rotation_period,
            orbital_period: val.orbital_period,
            gravity: val.gravity,
            population: val.population,
            climate: val.climate,
            terrain: val.terrain,
            surface_water: val.surface_water,
            url: val.url,
        }
    }
}

impl From<UpdatePlanet> for planet::UpdateModel {
    fn from(val: UpdatePlanet) -> Self {
        Self {
            name: val.name,
            description: val.description,
            diameter: val.diameter,
            rotation_period: val.rotation_period,
            orbital_period: val.orbital_period,
            gravity: val.gravity,
            population: val.population,
            climate: val.climate,
            terrain: val.terrain,
            surface_water: val.surface_water,
            url: val.url,
        }
    }
}

impl axum::response::IntoResponse for Planet {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}
