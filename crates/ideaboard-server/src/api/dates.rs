use axum::{extract::State, Extension, Json};
use serde::Serialize;

use ideaboard_core::DateKey;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct DateEntry {
    /// Six-digit `YYMMDD` key, the value used in `/api/v1/analysis/{key}`.
    pub key: String,
    /// Long human-readable label for the date picker.
    pub display: String,
}

#[derive(Debug, Serialize)]
pub(super) struct DatesData {
    pub today: DateEntry,
    /// Keys with a known artifact, ascending by date. Empty when the catalog
    /// has nothing — that renders as an empty picker, not an error.
    pub available: Vec<DateEntry>,
}

impl DateEntry {
    fn from_key(key: DateKey) -> Self {
        Self {
            key: key.to_string(),
            display: key.display(),
        }
    }
}

pub(super) async fn list_dates(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<DatesData>> {
    let available = state
        .catalog
        .available_keys()
        .into_iter()
        .map(DateEntry::from_key)
        .collect();

    Json(ApiResponse {
        data: DatesData {
            today: DateEntry::from_key(DateKey::today()),
            available,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
