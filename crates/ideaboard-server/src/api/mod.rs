mod analysis;
mod dates;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use ideaboard_store::{ArtifactBackend, DateCatalog, LoadError};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArtifactBackend>,
    pub catalog: Arc<dyn DateCatalog>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    fn status(&self) -> StatusCode {
        match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "invalid_date_key" | "bad_request" => StatusCode::BAD_REQUEST,
            "malformed_artifact" => StatusCode::BAD_GATEWAY,
            "timeout" => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Converts a load failure into the user-facing error body.
///
/// `NotFound` is the expected-absence case and is not logged; everything
/// else is logged with the request ID so the bad artifact can be located.
pub(super) fn map_load_error(request_id: String, error: &LoadError) -> ApiError {
    match error {
        LoadError::NotFound { .. } => {
            ApiError::new(request_id, "not_found", "no data for this date")
        }
        LoadError::Malformed { key, .. } => {
            tracing::error!(%request_id, %key, error = %error, "artifact is malformed");
            ApiError::new(
                request_id,
                "malformed_artifact",
                "data for this date is corrupted",
            )
        }
        LoadError::Timeout { .. } => {
            tracing::warn!(%request_id, error = %error, "artifact load timed out");
            ApiError::new(request_id, "timeout", "loading data timed out")
        }
        LoadError::Http(_) | LoadError::Io { .. } | LoadError::InvalidBaseUrl(_) => {
            tracing::error!(%request_id, error = %error, "artifact load failed");
            ApiError::new(request_id, "internal_error", "failed to load data")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/dates", get(dates::list_dates))
        .route("/api/v1/analysis/{key}", get(analysis::get_analysis))
        .route(
            "/api/v1/analysis/{key}/view",
            get(analysis::get_analysis_view),
        )
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}
