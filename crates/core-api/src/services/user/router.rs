use axum::{Json, extract::State};
use starwars_database::{DatabaseError, user};
use utoipa::path as route;
use utoipa_axum::{router::OpenApiRouter, routes};

#[cfg(feature = "metrics")]
use crate::metrics::*;
use crate::{ApiError, ApiJson, ApiState, Database, ErrorResponse};

use super::{DEFAULT_FAVORITE_NAME, NewUser, User, password::hash_password};

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(list_users, create_user))
}

/// Lists every user with a summary of their favorite list
#[route(get, path = "/users", responses((status = OK, body = Vec<User>)))]
async fn list_users(State(db): State<Database>) -> Result<Json<Vec<User>>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::User]);

    let users = db.get_all_users().await?;

    Ok(Json(users.into_iter().map(User::from).collect()))
}

/// Creates a user along with an empty favorite list
#[route(
    post,
    path = "/users",
    request_body = NewUser,
    responses((status = OK, body = User), (status = BAD_REQUEST, body = ErrorResponse))
)]
async fn create_user(
    State(db): State<Database>,
    ApiJson(new_user): ApiJson<NewUser>,
) -> Result<User, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Post, Object::User]);

    let password = hash_password(&new_user.password)?;

    let (user, favorite) = db
        .create_user(user::NewModel {
            email: new_user.email,
            password,
            is_active: new_user.is_active,
            favorite_name: new_user
                .favorite_name
                .unwrap_or_else(|| DEFAULT_FAVORITE_NAME.to_string()),
        })
        .await
        .map_err(|err| match err {
            DatabaseError::AlreadyExists => ApiError::BadRequest("User already exists".into()),
            err => err.into(),
        })?;

    tracing::info!(user_id = user.id, "created user");

    Ok((user, Some(favorite)).into())
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::test_util::{send, test_app};

    #[tokio::test]
    async fn created_user_has_favorite_summary_and_no_password() {
        let (app, _) = test_app().await;

        let (status, user) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({ "email": "luke@rebels.org", "password": "use the force" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["email"], json!("luke@rebels.org"));
        assert_eq!(user["is_active"], json!(true));
        assert_eq!(user["favorite"]["name"], json!("Favorites"));
        assert!(user["favorite"]["id"].is_i64());
        assert!(user.get("password").is_none());
    }

    #[tokio::test]
    async fn list_users_includes_created_users() {
        let (app, _) = test_app().await;
        send(
            &app,
            Method::POST,
            "/users",
            Some(json!({
                "email": "leia@rebels.org",
                "password": "help me obi-wan",
                "is_active": false,
                "favorite_name": "Alderaan memories"
            })),
        )
        .await;

        let (status, users) = send(&app, Method::GET, "/users", None).await;

        assert_eq!(status, StatusCode::OK);
        let users = users.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["is_active"], json!(false));
        assert_eq!(users[0]["favorite"]["name"], json!("Alderaan memories"));
    }

    #[tokio::test]
    async fn duplicate_email_is_bad_request() {
        let (app, _) = test_app().await;
        let body = json!({ "email": "han@falcon.net", "password": "shot first" });

        send(&app, Method::POST, "/users", Some(body.clone())).await;
        let (status, error) = send(&app, Method::POST, "/users", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["message"], json!("User already exists"));
    }
}
