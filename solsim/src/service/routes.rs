//! HTTP binding for the step controller.
//!
//! ENDPOINTS (all GET):
//! - /get_positions  current `[{name, pos, vel}]`
//! - /step?dt=T      advance by T days (default 1.0), same body shape
//! - /reset          rebuild the initial configuration, `{"status": "reset"}`
//!
//! `/step` additionally reports requested days, simulated days and the
//! sub-step count in `x-sim-*` headers, so a clamped advance is visible
//! without changing the body.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::error::SimError;
use crate::simulation::controller::StepController;

/// Days advanced when `/step` is called without `dt`
pub const DEFAULT_STEP_DAYS: f64 = 1.0;

pub const REQUESTED_HEADER: &str = "x-sim-requested-days";
pub const ELAPSED_HEADER: &str = "x-sim-elapsed-days";
pub const SUBSTEPS_HEADER: &str = "x-sim-substeps";

pub type SharedController = Arc<StepController>;

pub fn create_router(controller: SharedController) -> Router {
    Router::new()
        .route("/get_positions", get(positions_handler))
        .route("/step", get(step_handler))
        .route("/reset", get(reset_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(controller)
}

/// Raw `/step` query; `dt` stays a string so junk can fall back to the default
#[derive(Debug, Default, Deserialize)]
pub struct StepQuery {
    pub dt: Option<String>,
}

impl StepQuery {
    pub fn days(&self) -> f64 {
        match self.dt.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_STEP_DAYS,
            Some(raw) => match raw.parse::<f64>() {
                Ok(days) => days,
                Err(_) => {
                    log::warn!("unparseable dt {raw:?}, advancing {DEFAULT_STEP_DAYS} d");
                    DEFAULT_STEP_DAYS
                }
            },
        }
    }
}

pub async fn positions_handler(State(controller): State<SharedController>) -> impl IntoResponse {
    Json(controller.snapshot())
}

pub async fn step_handler(
    State(controller): State<SharedController>,
    Query(query): Query<StepQuery>,
) -> Result<Response, ApiError> {
    let report = controller.advance(query.days())?;

    let headers = [
        (HeaderName::from_static(REQUESTED_HEADER), header_value(report.requested)),
        (HeaderName::from_static(ELAPSED_HEADER), header_value(report.elapsed)),
        (HeaderName::from_static(SUBSTEPS_HEADER), HeaderValue::from(report.substeps)),
    ];
    Ok((StatusCode::OK, headers, Json(report.bodies)).into_response())
}

pub async fn reset_handler(State(controller): State<SharedController>) -> impl IntoResponse {
    controller.reset();
    Json(json!({ "status": "reset" }))
}

fn header_value(days: f64) -> HeaderValue {
    HeaderValue::from_str(&days.to_string()).unwrap_or(HeaderValue::from_static("0"))
}

/// Error type for route handlers
#[derive(Debug)]
pub struct ApiError(SimError);

impl From<SimError> for ApiError {
    fn from(err: SimError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            SimError::InvalidRequest(msg) => {
                log::info!("rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            SimError::Configuration(msg) => {
                log::error!("configuration error while serving: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
