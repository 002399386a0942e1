use axum::{Json, extract::State};
use utoipa::path as route;
use utoipa_axum::{router::OpenApiRouter, routes};

#[cfg(feature = "metrics")]
use crate::metrics::*;
use crate::{ApiError, ApiJson, ApiPath, ApiState, Database, ErrorResponse, OrNotFound};

use super::{NewVehicle, UpdateVehicle, Vehicle};

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_vehicles, create_vehicle))
        .routes(routes!(get_vehicle, update_vehicle, delete_vehicle))
}

/// Lists every vehicle
#[route(get, path = "/vehicles", responses((status = OK, body = Vec<Vehicle>)))]
async fn list_vehicles(State(db): State<Database>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Vehicle]);

    let vehicles = db.get_all_vehicles().await?;

    Ok(Json(vehicles.into_iter().map(Vehicle::from).collect()))
}

/// Gets a vehicle by id
#[route(
    get,
    path = "/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses((status = OK, body = Vehicle), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn get_vehicle(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Vehicle, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Get, Object::Vehicle]);

    let vehicle = db.get_vehicle_by_id(id).await.or_not_found("Vehicle")?;

    Ok(vehicle.into())
}

/// Creates a vehicle
#[route(
    post,
    path = "/vehicles",
    request_body = NewVehicle,
    responses((status = OK, body = Vehicle), (status = BAD_REQUEST, body = ErrorResponse))
)]
async fn create_vehicle(
    State(db): State<Database>,
    ApiJson(new_vehicle): ApiJson<NewVehicle>,
) -> Result<Vehicle, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Post, Object::Vehicle]);

    let vehicle = db.create_vehicle(new_vehicle.into()).await?;

    tracing::info!(vehicle_id = vehicle.id, "created vehicle");

    Ok(vehicle.into())
}

/// Updates the fields of a vehicle that are present in the body
#[route(
    put,
    path = "/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = UpdateVehicle,
    responses(
        (status = OK, body = Vehicle),
        (status = BAD_REQUEST, body = ErrorResponse),
        (status = NOT_FOUND, body = ErrorResponse)
    )
)]
async fn update_vehicle(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
    ApiJson(update_vehicle): ApiJson<UpdateVehicle>,
) -> Result<Vehicle, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Put, Object::Vehicle]);

    let vehicle = db
        .update_vehicle(id, update_vehicle.into())
        .await
        .or_not_found("Vehicle")?;

    tracing::info!(vehicle_id = vehicle.id, "updated vehicle");

    Ok(vehicle.into())
}

/// Deletes a vehicle by id
#[route(
    delete,
    path = "/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses((status = OK, body = String), (status = NOT_FOUND, body = ErrorResponse))
)]
async fn delete_vehicle(
    ApiPath(id): ApiPath<i32>,
    State(db): State<Database>,
) -> Result<Json<&'static str>, ApiError> {
    #[cfg(feature = "metrics")]
    inc!(REQUEST_COUNT for [Method::Delete, Object::Vehicle]);

    db.delete_vehicle(id).await.or_not_found("Vehicle")?;

    tracing::info!(vehicle_id = id, "deleted vehicle");

    Ok(Json("ok"))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    use crate::test_util::{send, test_app};

    fn sand_crawler() -> Value {
        json!({
            "name": "Sand Crawler",
            "description": "Mobile fortress used by Jawas",
            "model": "Digger Crawler",
            "vehicle_class": "wheeled",
            "manufacturer": "Corellia Mining Corporation",
            "cost_in_credits": 150000.0,
            "length": 36.8,
            "crew": 46.0,
            "passengers": 30.0,
            "max_atmosphering_speed": 30.0,
            "cargo_capacity": 50000.0,
            "consumables": "2 months",
            "url": "https://swapi.dev/api/vehicles/4/"
        })
    }

    #[tokio::test]
    async fn created_vehicle_matches_payload() {
        let (app, _) = test_app().await;

        let (status, created) = send(&app, Method::POST, "/vehicles", Some(sand_crawler())).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();

        let (_, fetched) = send(&app, Method::GET, &format!("/vehicles/{id}"), None).await;
        for (key, value) in sand_crawler().as_object().unwrap() {
            assert_eq!(&fetched[key], value, "field {key}");
        }
    }

    // passengers used to be stored as the literal ["passengers"]
    #[tokio::test]
    async fn passengers_comes_from_payload() {
        let (app, _) = test_app().await;

        let (_, created) = send(&app, Method::POST, "/vehicles", Some(sand_crawler())).await;

        assert_eq!(created["passengers"], json!(30.0));
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let (app, _) = test_app().await;
        let (_, created) = send(&app, Method::POST, "/vehicles", Some(sand_crawler())).await;
        let id = created["id"].as_i64().unwrap();

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/vehicles/{id}"),
            Some(json!({ "model": "Digger Crawler Mk II", "crew": 40.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["model"], json!("Digger Crawler Mk II"));
        assert_eq!(updated["crew"], json!(40.0));
        assert_eq!(updated["passengers"], created["passengers"]);
        assert_eq!(updated["manufacturer"], created["manufacturer"]);
    }

    #[tokio::test]
    async fn list_is_empty_without_vehicles() {
        let (app, _) = test_app().await;

        let (status, body) = send(&app, Method::GET, "/vehicles", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn delete_missing_vehicle_is_not_found() {
        let (app, _) = test_app().await;

        let (status, body) = send(&app, Method::DELETE, "/vehicles/3", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("Vehicle not found"));
    }
}
