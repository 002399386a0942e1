use axum::http::Request;
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

// Reuse the caller's correlation id when it is a valid UUID, otherwise
// start a new one for this request
pub fn create_correlation_id<T>(req: &Request<T>) -> Uuid {
    req.headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}
