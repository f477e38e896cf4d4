//! HTTP route handlers for the jump API.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use cloudhop::core::counter::min_jumps;
use cloudhop::core::error::JumpError;
use cloudhop::core::route::{Route, plan_route};
use cloudhop::core::types::Sequence;

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/jumps", post(count_jumps))
        .route("/route", post(route_clouds))
}

/// GET / and GET /api/health - load balancer health check.
pub async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct CloudsRequest {
    pub clouds: Vec<i64>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JumpsResponse {
    pub jumps: usize,
}

/// Request rejection mapped to a status code and JSON error body.
#[derive(Debug)]
pub enum ApiError {
    Jump(JumpError),
    TooLarge { clouds: usize, limit: usize },
}

impl From<JumpError> for ApiError {
    fn from(err: JumpError) -> Self {
        ApiError::Jump(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Jump(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": err.report() })),
            )
                .into_response(),
            ApiError::TooLarge { clouds, limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({
                    "error": {
                        "kind": "too_large",
                        "message": format!("{clouds} clouds exceeds limit {limit}"),
                    }
                })),
            )
                .into_response(),
        }
    }
}

/// POST /api/jumps - minimum jump count for `{"clouds": [...]}`.
pub async fn count_jumps(
    State(state): State<AppState>,
    Json(request): Json<CloudsRequest>,
) -> Result<Json<JumpsResponse>, ApiError> {
    let sequence = admit(&state, &request)?;
    let jumps = min_jumps(&sequence)?;
    debug!(clouds = sequence.len(), jumps, "counted jumps");
    Ok(Json(JumpsResponse { jumps }))
}

/// POST /api/route - landing clouds of a minimum-jump route.
pub async fn route_clouds(
    State(state): State<AppState>,
    Json(request): Json<CloudsRequest>,
) -> Result<Json<Route>, ApiError> {
    let sequence = admit(&state, &request)?;
    let route = plan_route(&sequence)?;
    debug!(clouds = sequence.len(), jumps = route.jumps, "planned route");
    Ok(Json(route))
}

fn admit(state: &AppState, request: &CloudsRequest) -> Result<Sequence, ApiError> {
    let limit = state.limits().max_clouds;
    if request.clouds.len() > limit {
        return Err(ApiError::TooLarge {
            clouds: request.clouds.len(),
            limit,
        });
    }
    Ok(Sequence::from_codes(&request.clouds)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudhop::io::config::{CloudhopConfig, load_config};

    fn state() -> AppState {
        AppState::new(CloudhopConfig::default())
    }

    fn request(clouds: &[i64]) -> Json<CloudsRequest> {
        Json(CloudsRequest {
            clouds: clouds.to_vec(),
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn count_returns_jumps() {
        let Json(body) = count_jumps(State(state()), request(&[0, 0, 1, 0, 0, 1, 0]))
            .await
            .expect("count");
        assert_eq!(body, JumpsResponse { jumps: 4 });
    }

    #[tokio::test]
    async fn route_returns_path() {
        let Json(route) = route_clouds(State(state()), request(&[0, 0, 0, 1, 0, 0]))
            .await
            .expect("route");
        assert_eq!(route.path, vec![0, 2, 4, 5]);
        assert_eq!(route.jumps, 3);
    }

    #[tokio::test]
    async fn unsolvable_is_unprocessable() {
        let err = count_jumps(State(state()), request(&[0, 1, 1, 0]))
            .await
            .expect_err("unsolvable");
        assert!(matches!(err, ApiError::Jump(JumpError::Unsolvable { index: 1 })));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn hazardous_start_is_rejected() {
        let err = route_clouds(State(state()), request(&[1, 0, 0, 1, 0]))
            .await
            .expect_err("invalid start");
        assert!(matches!(err, ApiError::Jump(JumpError::InvalidStart)));
    }

    #[tokio::test]
    async fn oversize_request_uses_configured_limit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cloudhop.toml");
        std::fs::write(&path, "[limits]\nmax_clouds = 3\n").expect("write config");
        let state = AppState::new(load_config(&path).expect("load config"));

        let err = count_jumps(State(state), request(&[0, 0, 0, 0]))
            .await
            .expect_err("too large");
        assert!(matches!(err, ApiError::TooLarge { clouds: 4, limit: 3 }));
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
