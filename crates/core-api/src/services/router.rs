use utoipa_axum::router::OpenApiRouter;

use crate::ApiState;

use super::{character, favorite, planet, user, vehicle};

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .merge(user::router())
        .merge(favorite::router())
        .merge(character::router())
        .merge(planet::router())
        .merge(vehicle::router())
}
