use axum::Router;
use axum::routing::get;
use prometheus::IntCounterVec;
use prometheus::register_int_counter_vec;
use serde::Deserialize;
use std::sync::LazyLock;
use tower_http::trace::TraceLayer;

/**
 * The metrics are served from their own listener rather than the API
 * server, so they can stay reachable only from inside the network.
 */

#[derive(Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_url")]
    url: String,
    #[serde(default = "default_port")]
    port: u16,
}

fn default_url() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            port: default_port(),
        }
    }
}

pub fn serve_metrics_server(config: MetricsConfig) {
    let addr = format!("{}:{}", config.url, config.port);

    tokio::task::spawn(async move {
        let listener = match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(err) => {
                tracing::error!(error = %err, "unable to start metrics server on {}", addr);
                return;
            }
        };

        let app = Router::new().route("/metrics", get(metrics)).layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    correlation_id = %create_correlation_id(request)
                )
            }),
        );

        tracing::info!("started metrics server on {}", addr);

        if let Err(err) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal("Shutting down metrics server"))
            .await
        {
            tracing::error!(error = %err, "metrics server stopped");
        }
    });

    // Touch every label pair up front so the series exist before the first request
    for m in [Method::Get, Method::Post, Method::Put, Method::Delete] {
        for o in [
            Object::User,
            Object::Favorite,
            Object::Planet,
            Object::Character,
            Object::Vehicle,
        ] {
            REQUEST_COUNT.with_label_values(&[m.into(), o.into()]);
        }
    }
}

async fn metrics() -> String {
    prometheus::TextEncoder::new()
        .encode_to_string(&prometheus::gather())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Copy)]
pub enum Object {
    User,
    Favorite,
    Planet,
    Character,
    Vehicle,
}

pub static REQUEST_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "request_count",                           // label name
        "Number of requests by method and object", // description
        &["method", "object"]                      // sub-label names
    )
    // Unwrapping here is okay as this happens at the start of execution
    // so the failure will be found immediately
    .unwrap()
});

#[allow(unused)]
macro_rules! inc {
    ($m:ident for [$( $l:expr ),*]) => {
        $m.with_label_values(&[$($l.into()),*]).inc();
    };
    ($m:ident for $l:expr) => {
        $m.with_label_values(&[$l.into()]).inc();
    };
}

#[allow(unused)]
pub(crate) use inc;

use crate::middleware::create_correlation_id;
use crate::shutdown_signal;

// These are helper methods to convert from Enum to str,
// due to a limitation of the library not accepting Enums directly
impl From<Method> for &str {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Object> for &str {
    fn from(value: Object) -> Self {
        match value {
            Object::User => "user",
            Object::Favorite => "favorite",
            Object::Planet => "planet",
            Object::Character => "character",
            Object::Vehicle => "vehicle",
        }
    }
}
