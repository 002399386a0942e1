use axum::{Json, extract::State};
use utoipa::path as route;
use utoipa_axum::{router::OpenApiRouter, routes};

#[cfg(feature = "metrics")]
use crate::metrics::*;
use crate::{ApiError, ApiJson, ApiPath, ApiState, Database, ErrorResponse, OrNotFound};

use super::{NewPlanet, Planet, UpdatePlanet};

// NOTE: the routes!() macro only accepts handlers that share a path,
// so the collection and the item routes are registered separately
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_planets, create_planet))
        .routes(routes!(get_planet, update_planet, delete_planet))
}

/// Lists every planet
#[route(get, path = "/planets", responses((status = OK, body = Vec<Planet>)))]
async fn list_planets(State(db): State<Database>) -> Result<Json<Vec<Planet>>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Planet]);

    let planets = db.get_all_planets().await?;

    Ok(Json(planets.into_iter().map(Planet::from).collect()))
}

/// Gets a planet by id
#[route(
    get,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet id")),
    responses((status = OK, body = Planet), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn get_planet(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Planet, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Planet]);

    let planet = db.get_planet_by_id(id).await.or_not_found("Planet")?;

    Ok(planet.into())
}

/// Creates a planet
#[route(
    post,
    path = "/planets",
    request_body = NewPlanet,
    responses((status = OK, body = Planet), (status = BAD_REQUEST, body = ErrorResponse))
)]
async fn create_planet(
    State(db): State<Database>,
    ApiJson(new_planet): ApiJson<NewPlanet>,
) -> Result<Planet, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Post, Object::Planet]);

    let planet = db.create_planet(new_planet.into()).await?;

    tracing::info!(planet_id = planet.id, "created planet");

    Ok(planet.into())
}

/// Updates the fields of a planet that are present in the body
#[route(
    put,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet id")),
    request_body = UpdatePlanet,
    responses(
        (status = OK, body = Planet),
        (status = BAD_REQUEST, body = ErrorResponse),
        (status = NOT_FOUND, body = ErrorResponse)
    )
)]
async fn update_planet(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
    ApiJson(update_planet): ApiJson<UpdatePlanet>,
) -> Result<Planet, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Put, Object::Planet]);

    let planet = db
        .update_planet(id, update_planet.into())
        .await
        .or_not_found("Planet")?;

    tracing::info!(planet_id = planet.id, "updated planet");

    Ok(planet.into())
}

/// Deletes a planet by id
#[route(
    delete,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet id")),
    responses((status = OK, body = String), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn delete_planet(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Json<&'static str>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Delete, Object::Planet]);

    db.delete_planet(id).await.or_not_found("Planet")?;

    tracing::info!(planet_id = id, "deleted planet");

    Ok(Json("ok"))
}
