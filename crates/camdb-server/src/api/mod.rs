mod cameras;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use camdb_store::{AppCameraService, StoreError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub cameras: Arc<AppCameraService>,
    /// Include internal error text in 5xx bodies (development only).
    pub expose_error_details: bool,
}

/// Problem-details error body (RFC 9457 shape plus `code` and `request_id`).
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let status = status_for_code(&code);
        Self {
            problem_type: "about:blank",
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            code,
            request_id: request_id.into(),
            timestamp: Utc::now(),
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn status_for_code(code: &str) -> StatusCode {
    match code {
        "not_found" => StatusCode::NOT_FOUND,
        "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
        "unavailable" => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}

impl AppState {
    /// Map a loader failure to an API error, logging it with context.
    ///
    /// A missing source becomes a 404; everything else is a 500 whose detail
    /// only carries the underlying error when `expose_error_details` is set.
    pub(super) fn map_store_error(
        &self,
        request_id: String,
        error: &StoreError,
        context: &str,
    ) -> ApiError {
        tracing::error!(request_id = %request_id, error = %error, "{context}");

        if error.is_not_found() {
            return ApiError::new(request_id, "not_found", "camera source not found");
        }

        let detail = if self.expose_error_details {
            format!("{context}: {error}")
        } else {
            format!("{context}.")
        };
        ApiError::new(request_id, "internal_error", detail)
    }
}

fn build_cors(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/cameras", get(cameras::list_cameras))
        .route("/api/cameras/search", get(cameras::search_cameras))
        .route("/api/cameras/columns", get(cameras::list_camera_columns))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(cors_origin))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cameras: Option<usize>,
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.cameras.get_all().await {
        Ok(cameras) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "ok",
                cameras: Some(cameras.len()),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: camera source unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody {
                    status: "degraded",
                    cameras: None,
                }),
            )
        }
    }
}
