use axum::{
    extract::{Path, State},
    Extension, Json,
};

use ideaboard_core::project::DashboardView;
use ideaboard_core::{AnalysisDocument, DateKey};
use ideaboard_store::ArtifactStore;

use crate::middleware::RequestId;

use super::{map_load_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// Parses the path segment as a date key, or answers 400 with the parse
/// failure. The raw key is echoed back so the caller can see what was wrong.
fn parse_key(req_id: &str, raw: &str) -> Result<DateKey, ApiError> {
    raw.parse()
        .map_err(|e: ideaboard_core::DateKeyError| {
            ApiError::new(req_id.to_string(), "invalid_date_key", e.to_string())
        })
}

/// `GET /api/v1/analysis/{key}` — the raw analysis document for one day,
/// exactly as persisted.
pub(super) async fn get_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_key): Path<String>,
) -> Result<Json<ApiResponse<AnalysisDocument>>, ApiError> {
    let key = parse_key(&req_id.0, &raw_key)?;
    let doc = state
        .store
        .load(key)
        .await
        .map_err(|e| map_load_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: doc,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/v1/analysis/{key}/view` — the projected dashboard view:
/// ranked ideas with engagement totals, category histogram, summary
/// counters and discovery rate.
pub(super) async fn get_analysis_view(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_key): Path<String>,
) -> Result<Json<ApiResponse<DashboardView>>, ApiError> {
    let key = parse_key(&req_id.0, &raw_key)?;
    let doc = state
        .store
        .load(key)
        .await
        .map_err(|e| map_load_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: DashboardView::project(&doc),
        meta: ResponseMeta::new(req_id.0),
    }))
}
