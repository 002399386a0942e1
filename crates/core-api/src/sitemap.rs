use serde::Serialize;
use utoipa::openapi::{OpenApi, path::PathItem};

pub const DOCS_PATH: &str = "/swagger-ui";

/// Machine readable index of every route, served at `/`
#[derive(Clone, Debug, Serialize)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
    pub docs: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Endpoint {
    pub path: String,
    pub methods: Vec<&'static str>,
}

impl Sitemap {
    pub fn from_openapi(openapi: &OpenApi) -> Self {
        let mut endpoints = vec![Endpoint {
            path: "/".to_string(),
            methods: vec!["GET"],
        }];

        endpoints.extend(openapi.paths.paths.iter().map(|(path, item)| Endpoint {
            path: path.clone(),
            methods: methods(item),
        }));

        Self {
            endpoints,
            docs: DOCS_PATH,
        }
    }
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}
