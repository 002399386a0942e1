use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use starwars_database::{DatabaseError, DatabaseResult};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    InternalServerError,
}

/// Body of every error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.to_string(),
            status_code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApiError> for axum::response::Response {
    fn from(value: ApiError) -> Self {
        value.into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(value: DatabaseError) -> Self {
        match value {
            DatabaseError::NotFound => Self::NotFound("not found".into()),
            DatabaseError::AlreadyExists => Self::BadRequest("already exists".into()),
            err => {
                tracing::error!(error = %err, "database failure");
                Self::InternalServerError
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

/// Every by-id lookup goes through here so a missing row is always a typed 404
pub trait OrNotFound<T> {
    fn or_not_found(self, entity: &str) -> Result<T, ApiError>;
}

impl<T> OrNotFound<T> for DatabaseResult<Option<T>> {
    fn or_not_found(self, entity: &str) -> Result<T, ApiError> {
        self?.ok_or_else(|| ApiError::not_found(entity))
    }
}

/// `axum::Json`, but body rejections (missing keys, wrong types, bad syntax)
/// become an `ApiError::BadRequest` with the usual error body
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with the same treatment, so `/planets/abc` is a 400
/// carrying the error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
