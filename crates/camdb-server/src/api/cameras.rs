//! `GET /api/cameras`, `/api/cameras/search` and `/api/cameras/columns`.
//!
//! Camera lists are returned as bare JSON arrays, which is what the map UI
//! consumes. Blank search terms are rejected here, not in the service.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use camdb_core::CameraRecord;
use camdb_store::CameraColumns;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct NameQuery {
    pub name: Option<String>,
}

impl NameQuery {
    /// The term, or `None` when missing or whitespace-only.
    fn term(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

pub(super) async fn list_cameras(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<CameraRecord>>, ApiError> {
    let cameras = state.cameras.get_all().await.map_err(|e| {
        state.map_store_error(req_id.0.clone(), &e, "unexpected error while fetching cameras")
    })?;

    Ok(Json(cameras.to_vec()))
}

pub(super) async fn search_cameras(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<CameraRecord>>, ApiError> {
    let Some(term) = query.term() else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "query parameter 'name' is required",
        ));
    };

    let cameras = state.cameras.search(term).await.map_err(|e| {
        state.map_store_error(req_id.0.clone(), &e, "unexpected error while searching cameras")
    })?;

    Ok(Json(cameras))
}

pub(super) async fn list_camera_columns(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NameQuery>,
) -> Result<Json<CameraColumns>, ApiError> {
    let columns = state.cameras.columns(query.term()).await.map_err(|e| {
        state.map_store_error(req_id.0.clone(), &e, "unexpected error while grouping cameras")
    })?;

    Ok(Json(columns))
}
