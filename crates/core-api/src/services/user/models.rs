use serde::{Deserialize, Serialize};
use starwars_database::{favorite, user};
use utoipa::ToSchema;

/**
 * These structs mirror the database models, but the API shape is kept
 * separate: the password hash never leaves the database crate and the
 * favorite list is reduced to a summary to keep the user payload flat.
 */

#[derive(Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub favorite: Option<FavoriteSummary>,
}

/// Id and name of a user's favorite list, without its members
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub favorite_name: Option<String>,
}

fn default_is_active() -> bool {
    true
}

pub const DEFAULT_FAVORITE_NAME: &str = "Favorites";

impl From<(user::Model, Option<favorite::Model>)> for User {
    fn from((user, favorite): (user::Model, Option<favorite::Model>)) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            favorite: favorite.map(|favorite| FavoriteSummary {
                id: favorite.id,
                name: favorite.name,
            }),
        }
    }
}

impl axum::response::IntoResponse for User {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}
