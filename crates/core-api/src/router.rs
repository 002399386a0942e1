use axum::{Json, Router, routing::get};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::{ApiState, services, sitemap::DOCS_PATH, sitemap::Sitemap};

#[derive(OpenApi)]
#[openapi(info(
    title = "starwars_api",
    description = "Planets, characters, vehicles and per-user favorite lists"
))]
struct ApiDoc;

pub fn create_router() -> Router<ApiState> {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(services::router())
        .split_for_parts();

    let sitemap = Sitemap::from_openapi(&openapi);

    router
        .route(
            "/",
            get(move || {
                let sitemap = sitemap.clone();
                async move { Json(sitemap) }
            }),
        )
        .merge(SwaggerUi::new(DOCS_PATH).url("/api-docs/open-api.json", openapi))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    use crate::test_util::{send, test_app};

    fn methods_of(sitemap: &Value, path: &str) -> Value {
        sitemap["endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .find(|endpoint| endpoint["path"] == json!(path))
            .map(|endpoint| endpoint["methods"].clone())
            .unwrap_or(Value::Null)
    }

    #[tokio::test]
    async fn sitemap_lists_every_route() {
        let (app, _) = test_app().await;

        let (status, sitemap) = send(&app, Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(sitemap["docs"], json!("/swagger-ui"));
        assert_eq!(methods_of(&sitemap, "/"), json!(["GET"]));
        assert_eq!(methods_of(&sitemap, "/users"), json!(["GET", "POST"]));
        assert_eq!(methods_of(&sitemap, "/users/favorites"), json!(["GET"]));
        assert_eq!(methods_of(&sitemap, "/users/{id}/favorites"), json!(["GET"]));
        assert_eq!(
            methods_of(&sitemap, "/users/favorites/planets/{planet_id}"),
            json!(["POST"])
        );
        assert_eq!(
            methods_of(&sitemap, "/users/{id}/favorites/planets/{planet_id}"),
            json!(["POST"])
        );
        for collection in ["/people", "/planets", "/vehicles"] {
            assert_eq!(methods_of(&sitemap, collection), json!(["GET", "POST"]));
            assert_eq!(
                methods_of(&sitemap, &format!("{collection}/{{id}}")),
                json!(["GET", "PUT", "DELETE"])
            );
        }
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (app, _) = test_app().await;

        let (status, doc) = send(&app, Method::GET, "/api-docs/open-api.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/planets/{id}"]["put"].is_object());
    }
}
