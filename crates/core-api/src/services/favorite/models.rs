use serde::{Deserialize, Serialize};
use starwars_database::favorite;
use utoipa::ToSchema;

use crate::services::{character::Character, planet::Planet, vehicle::Vehicle};

/// A favorite list with every member expanded
#[derive(Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub name: String,
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<favorite::Contents> for Favorite {
    fn from(val: favorite::Contents) -> Self {
        Self {
            id: val.favorite.id,
            name: val.favorite.name,
            planets: val.planets.into_iter().map(Planet::from).collect(),
            characters: val.characters.into_iter().map(Character::from).collect(),
            vehicles: val.vehicles.into_iter().map(Vehicle::from).collect(),
        }
    }
}

impl axum::response::IntoResponse for Favorite {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}

impl axum::response::IntoResponse for Message {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}
