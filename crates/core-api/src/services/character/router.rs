use axum::{Json, extract::State};
use utoipa::path as route;
use utoipa_axum::{router::OpenApiRouter, routes};

#[cfg(feature = "metrics")]
use crate::metrics::*;
use crate::{ApiError, ApiJson, ApiPath, ApiState, Database, ErrorResponse, OrNotFound};

use super::{Character, NewCharacter, UpdateCharacter};

// Characters are served under /people
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_characters, create_character))
        .routes(routes!(get_character, update_character, delete_character))
}

/// Lists every character
#[route(get, path = "/people", responses((status = OK, body = Vec<Character>)))]
async fn list_characters(State(db): State<Database>) -> Result<Json<Vec<Character>>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Character]);

    let characters = db.get_all_characters().await?;

    Ok(Json(characters.into_iter().map(Character::from).collect()))
}

/// Gets a character by id
#[route(
    get,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Character id")),
    responses((status = OK, body = Character), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn get_character(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Character, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Character]);

    let character = db.get_character_by_id(id).await.or_not_found("Character")?;

    Ok(character.into())
}

/// Creates a character
#[route(
    post,
    path = "/people",
    request_body = NewCharacter,
    responses((status = OK, body = Character), (status = BAD_REQUEST, body = ErrorResponse))
)]
async fn create_character(
    State(db): State<Database>,
    ApiJson(new_character): ApiJson<NewCharacter>,
) -> Result<Character, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Post, Object::Character]);

    let character = db.create_character(new_character.into()).await?;

    tracing::info!(character_id = character.id, "created character");

    Ok(character.into())
}

/// Updates the fields of a character that are present in the body
#[route(
    put,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Character id")),
    request_body = UpdateCharacter,
    responses(
        (status = OK, body = Character),
        (status = BAD_REQUEST, body = ErrorResponse),
        (status = NOT_FOUND, body = ErrorResponse)
    )
)]
async fn update_character(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
    ApiJson(update_character): ApiJson<UpdateCharacter>,
) -> Result<Character, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Put, Object::Character]);

    let character = db
        .update_character(id, update_character.into())
        .await
        .or_not_found("Character")?;

    tracing::info!(character_id = character.id, "updated character");

    Ok(character.into())
}

/// Deletes a character by id
#[route(
    delete,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Character id")),
    responses((status = OK, body = String), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn delete_character(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Json<&'static str>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Delete, Object::Character]);

    db.delete_character(id).await.or_not_found("Character")?;

    tracing::info!(character_id = id, "deleted character");

    Ok(Json("ok"))
}
