use serde::{Deserialize, Serialize};
use starwars_database::character;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub homeworld: String,
    pub height: f64,
    pub mass: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NewCharacter {
    pub name: String,
    pub description: String,
    pub homeworld: String,
    pub height: f64,
    pub mass: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub homeworld: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub url: Option<String>,
}

impl From<character::Model> for Character {
    fn from(val: character::Model) -> Self {
        Self {
            id: val.id,
            name: val.name,
            description: val.description,
            homeworld: val.homeworld,
            height: val.height,
            mass: val.mass,
            hair_color: val.hair_color,
            skin_color: val.skin_color,
            eye_color: val.eye_color,
            birth_year: val.birth_year,
            gender: val.gender,
            url: val.url,
        }
    }
}

impl From<NewCharacter> for character::NewModel {
    fn from(val: NewCharacter) -> Self {
        Self {
            name: val.name,
            description: val.description,
            homeworld: val.homeworld,
            height: val.height,
            mass: val.mass,
            hair_color: val.hair_color,
            skin_color: val.skin_color,
            eye_color: val.eye_color,
            birth_year: val.birth_year,
            gender: val.gender,
            url: val.url,
        }
    }
}

impl From<UpdateCharacter> for character::UpdateModel {
    fn from(val: UpdateCharacter) -> Self {
        Self {
            name: val.name,
            description: val.description,
            homeworld: val.homeworld,
            height: val.height,
            mass: val.mass,
            hair_color: val.hair_color,
            skin_color: val.skin_color,
            eye_color: val.eye_color,
            birth_year: val.birth_year,
            gender: val.gender,
            url: val.url,
        }
    }
}

impl axum::response::IntoResponse for Character {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}
