use axum::extract::State;
use starwars_database::DatabaseError;
use utoipa::path as route;
use utoipa_axum::{router::OpenApiRouter, routes};

#[cfg(feature = "metrics")]
use crate::metrics::*;
use crate::{ApiError, ApiPath, ApiState, Database, ErrorResponse, OrNotFound};

use super::{Favorite, Message};

// Each route needs its own routes!() call since no two of them share a path.
// The `/users/favorites` variants act on the first active user, the
// `/users/{id}/...` variants on an explicit one.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(get_active_user_favorites))
        .routes(routes!(get_user_favorites))
        .routes(routes!(add_active_user_favorite_planet))
        .routes(routes!(add_user_favorite_planet))
}

/// Gets the favorite list of the first active user
#[route(
    get,
    path = "/users/favorites",
    responses((status = OK, body = Favorite), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn get_active_user_favorites(State(db): State<Database>) -> Result<Favorite, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Favorite]);

    let user = db.get_first_active_user().await.or_not_found("User")?;

    favorites_of(&db, user.id).await
}

/// Gets the favorite list of a user
#[route(
    get,
    path = "/users/{id}/favorites",
    params(("id" = i32, Path, description = "User id")),
    responses((status = OK, body = Favorite), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn get_user_favorites(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Favorite, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Favorite]);

    let user = db.get_user_by_id(id).await.or_not_found("User")?;

    favorites_of(&db, user.id).await
}

/// Adds a planet to the favorite list of the first active user
#[route(
    post,
    path = "/users/favorites/planets/{planet_id}",
    params(("planet_id" = i32, Path, description = "Planet id")),
    responses(
        (status = OK, body = Message),
        (status = BAD_REQUEST, body = ErrorResponse),
        (status = NOT_FOUND, body = ErrorResponse)
    )
)]
async fn add_active_user_favorite_planet(
    ApiPath(planet_id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Message, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Post, Object::Favorite]);

    let user = db.get_first_active_user().await.or_not_found("User")?;

    add_planet(&db, user.id, planet_id).await
}

/// Adds a planet to the favorite list of a user
#[route(
    post,
    path = "/users/{id}/favorites/planets/{planet_id}",
    params(
        ("id" = i32, Path, description = "User id"),
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = OK, body = Message),
        (status = BAD_REQUEST, body = ErrorResponse),
        (status = NOT_FOUND, body = ErrorResponse)
    )
)]
async fn add_user_favorite_planet(
    ApiPath((id, planet_id)): ApiPath<(i32, i32)>,
    State(db): State<Database>,
) -> Result<Message, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Post, Object::Favorite]);

    let user = db.get_user_by_id(id).await.or_not_found("User")?;

    add_planet(&db, user.id, planet_id).await
}

async fn favorites_of(db: &Database, user_id: i32) -> Result<Favorite, ApiError> {
    let favorite = db
        .get_favorite_by_user_id(user_id)
        .await
        .or_not_found("Favorite list")?;

    Ok(db.get_favorite_contents(favorite).await?.into())
}

async fn add_planet(db: &Database, user_id: i32, planet_id: i32) -> Result<Message, ApiError> {
    let favorite = db
        .get_favorite_by_user_id(user_id)
        .await
        .or_not_found("Favorite list")?;
    let planet = db.get_planet_by_id(planet_id).await.or_not_found("Planet")?;

    db.add_favorite_planet(favorite.id, planet.id)
        .await
        .map_err(|err| match err {
            DatabaseError::AlreadyExists => {
                ApiError::BadRequest("The Planet is already added".into())
            }
            err => err.into(),
        })?;

    tracing::info!(
        favorite_id = favorite.id,
        planet_id = planet.id,
        "added planet to favorites"
    );

    Ok(Message::new("Planet Added to the Collection"))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};
    use starwars_database::{favorite_character, favorite_vehicle, sea_orm::{EntityTrait, Set}};

    use crate::test_util::{send, test_app};

    async fn create_user(app: &axum::Router, email: &str, is_active: bool) -> i64 {
        let (_, user) = send(
            app,
            Method::POST,
            "/users",
            Some(json!({ "email": email, "password": "secret", "is_active": is_active })),
        )
        .await;

        user["id"].as_i64().unwrap()
    }

    async fn create_planet(app: &axum::Router, name: &str) -> Value {
        let (_, planet) = send(
            app,
            Method::POST,
            "/planets",
            Some(json!({
                "name": name,
                "description": "somewhere far away",
                "diameter": 10465.0,
                "rotation_period": 23.0,
                "orbital_period": 304.0,
                "gravity": 1.0,
                "population": 200000,
                "climate": "arid",
                "terrain": "desert",
                "surface_water": 1.0,
                "url": "https://swapi.dev/api/planets/1/"
            })),
        )
        .await;

        planet
    }

    #[tokio::test]
    async fn favoriting_same_planet_twice_is_rejected() {
        let (app, _) = test_app().await;
        create_user(&app, "luke@rebels.org", true).await;
        let planet = create_planet(&app, "Tatooine").await;
        let uri = format!("/users/favorites/planets/{}", planet["id"]);

        let (status, body) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Planet Added to the Collection" }));

        let (status, body) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "The Planet is already added", "status_code": 400 })
        );

        let (status, favorites) = send(&app, Method::GET, "/users/favorites", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(favorites["planets"], json!([planet]));
    }

    #[tokio::test]
    async fn active_user_is_the_first_active_row() {
        let (app, _) = test_app().await;
        create_user(&app, "vader@empire.gov", false).await;
        let han = create_user(&app, "han@falcon.net", true).await;
        create_user(&app, "chewie@falcon.net", true).await;
        let planet = create_planet(&app, "Kessel").await;

        send(
            &app,
            Method::POST,
            &format!("/users/favorites/planets/{}", planet["id"]),
            None,
        )
        .await;

        let (_, favorites) = send(&app, Method::GET, &format!("/users/{han}/favorites"), None).await;
        assert_eq!(favorites["planets"][0]["name"], json!("Kessel"));
    }

    #[tokio::test]
    async fn no_active_user_is_not_found() {
        let (app, _) = test_app().await;
        create_user(&app, "vader@empire.gov", false).await;

        let (status, body) = send(&app, Method::GET, "/users/favorites", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "User not found", "status_code": 404 }));

        let (status, _) = send(&app, Method::POST, "/users/favorites/planets/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn favorites_of_explicit_user() {
        let (app, _) = test_app().await;
        create_user(&app, "luke@rebels.org", true).await;
        let leia = create_user(&app, "leia@rebels.org", false).await;
        let planet = create_planet(&app, "Alderaan").await;

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/users/{leia}/favorites/planets/{}", planet["id"]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, favorites) = send(&app, Method::GET, &format!("/users/{leia}/favorites"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(favorites["planets"], json!([planet]));
        assert_eq!(favorites["characters"], json!([]));
        assert_eq!(favorites["vehicles"], json!([]));

        // the active user's list is untouched
        let (_, active) = send(&app, Method::GET, "/users/favorites", None).await;
        assert_eq!(active["planets"], json!([]));
    }

    #[tokio::test]
    async fn missing_user_or_planet_is_not_found() {
        let (app, _) = test_app().await;
        let luke = create_user(&app, "luke@rebels.org", true).await;

        let (status, body) = send(&app, Method::GET, "/users/77/favorites", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("User not found"));

        let (status, _) = send(&app, Method::POST, "/users/77/favorites/planets/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/users/{luke}/favorites/planets/404"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("Planet not found"));
    }

    #[tokio::test]
    async fn favorites_expand_characters_and_vehicles() {
        let (app, db) = test_app().await;
        let luke = create_user(&app, "luke@rebels.org", true).await;
        let (_, character) = send(
            &app,
            Method::POST,
            "/people",
            Some(json!({
                "name": "Obi-Wan Kenobi",
                "description": "Jedi Master",
                "homeworld": "Stewjon",
                "height": 182.0,
                "mass": 77.0,
                "hair_color": "auburn",
                "skin_color": "fair",
                "eye_color": "blue-gray",
                "birth_year": "57BBY",
                "gender": "male",
                "url": "https://swapi.dev/api/people/10/"
            })),
        )
        .await;
        let (_, vehicle) = send(
            &app,
            Method::POST,
            "/vehicles",
            Some(json!({
                "name": "T-16 skyhopper",
                "description": "Luke's old hopper",
                "model": "T-16 skyhopper",
                "vehicle_class": "repulsorcraft",
                "manufacturer": "Incom Corporation",
                "cost_in_credits": 14500.0,
                "length": 10.4,
                "crew": 1.0,
                "passengers": 1.0,
                "max_atmosphering_speed": 1200.0,
                "cargo_capacity": 50.0,
                "consumables": "0",
                "url": "https://swapi.dev/api/vehicles/6/"
            })),
        )
        .await;

        // there is no endpoint for these collections, link them directly
        let favorite = db.get_favorite_by_user_id(luke as i32).await.unwrap().unwrap();
        favorite_character::Entity::insert(favorite_character::ActiveModel {
            favorite_id: Set(favorite.id),
            character_id: Set(character["id"].as_i64().unwrap() as i32),
        })
        .exec_without_returning(&db.conn)
        .await
        .unwrap();
        favorite_vehicle::Entity::insert(favorite_vehicle::ActiveModel {
            favorite_id: Set(favorite.id),
            vehicle_id: Set(vehicle["id"].as_i64().unwrap() as i32),
        })
        .exec_without_returning(&db.conn)
        .await
        .unwrap();

        let (status, favorites) = send(&app, Method::GET, "/users/favorites", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(favorites["id"], json!(favorite.id));
        assert_eq!(favorites["characters"], json!([character]));
        assert_eq!(favorites["vehicles"], json!([vehicle]));
    }

    #[tokio::test]
    async fn deleted_planet_leaves_favorites() {
        let (app, _) = test_app().await;
        create_user(&app, "luke@rebels.org", true).await;
        let planet = create_planet(&app, "Alderaan").await;
        send(
            &app,
            Method::POST,
            &format!("/users/favorites/planets/{}", planet["id"]),
            None,
        )
        .await;

        send(&app, Method::DELETE, &format!("/planets/{}", planet["id"]), None).await;

        let (_, favorites) = send(&app, Method::GET, "/users/favorites", None).await;
        assert_eq!(favorites["planets"], json!([]));
    }

    #[tokio::test]
    async fn unparsable_user_id_is_bad_request() {
        let (app, _) = test_app().await;

        let (status, body) = send(&app, Method::POST, "/users/luke/favorites/planets/1", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], json!(400));
    }
}
