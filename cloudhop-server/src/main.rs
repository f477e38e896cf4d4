//! HTTP wrapper around the cloudhop jump counter.
//!
//! Stateless: every request is one independent computation. `GET /` answers
//! the load balancer health check.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use cloudhop::io::config::{DEFAULT_CONFIG_PATH, load_config};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "cloudhop-server")]
#[command(about = "HTTP API for minimum cloud jumps")]
struct Args {
    /// Config file (missing file means defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address to bind the server to (overrides server.bind)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cloudhop_server=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = load_config(&args.config).context("load config")?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;
    info!(
        max_clouds = config.limits.max_clouds,
        "starting cloudhop-server"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port)
        .parse()
        .context("parse bind address")?;
    let app = app(AppState::new(config));

    info!(addr = %addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health))
        .nest("/api", routes::api_router())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use cloudhop::io::config::CloudhopConfig;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        let response = app(AppState::new(CloudhopConfig::default()))
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn root_answers_health_check() {
        let (status, body) = send(Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");

        let (status, _) = send(Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn jumps_endpoint_is_routed() {
        let (status, body) = send(
            Method::POST,
            "/api/jumps",
            Some(json!({ "clouds": [0, 0, 1, 0, 0, 1, 0] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value, json!({ "jumps": 4 }));
    }

    #[tokio::test]
    async fn route_endpoint_reports_errors_as_json() {
        let (status, body) = send(
            Method::POST,
            "/api/route",
            Some(json!({ "clouds": [0, 1, 1, 0] })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let value: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value["error"]["kind"], "unsolvable");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _) = send(Method::POST, "/api/jump", Some(json!({ "clouds": [0] }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn parse_overrides() {
        let args = Args::parse_from(["cloudhop-server", "--port", "8080"]);
        assert_eq!(args.port, Some(8080));
        assert!(args.bind.is_none());
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
